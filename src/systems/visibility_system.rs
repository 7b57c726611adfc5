// src/systems/visibility_system.rs

use log::debug;

use crate::board::Board;
use crate::system::System;

/// 各場札の一番上のカードを表にするシステム。
///
/// カードが表になるのはここだけ。一番上になったときに表になり、
/// それより下のカードの向きには一切触らない。
#[derive(Default)]
pub struct VisibilitySystem;

impl VisibilitySystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for VisibilitySystem {
    fn run(&mut self, board: &mut Board) {
        show_visible_cards(board);
    }
}

pub fn show_visible_cards(board: &mut Board) {
    for (column, cards) in board.tableau.iter_mut().enumerate() {
        if let Some(top) = cards.last_mut().filter(|c| c.active) {
            if top.visible != Some(true) {
                debug!("Revealing {:?} {:?} at top of column {}", top.rank, top.suit, column);
            }
            top.visible = Some(true);
        }
    }
}

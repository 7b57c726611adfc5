// src/logic/rules/move_validation.rs
//! 持ち上げ中のカードを、指定した場所に置けるかの総合チェック。

use log::debug;

use super::foundation::foundation_can_accept;
use super::tableau::tableau_can_accept;
use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::{DropTarget, PileKind, FOUNDATION_SLOTS};

/// 場札 `column` の `row` 番目から一番上までのカード。
///
/// 空の列なら `row` に関係なく空スライス (列そのものが対象)。列が範囲外、
/// または空でない列で `row` がカードを指していなければ `None`。
pub fn target_chain(board: &Board, column: usize, row: usize) -> Option<&[Card]> {
    let cards = board.tableau_columns().get(column)?;
    if cards.is_empty() {
        return Some(&[]);
    }
    cards.get(row..).filter(|chain| !chain.is_empty())
}

/// 今持ち上げているカードを `target` に置けるか。盤面は一切変えない。
pub fn is_move_valid(board: &Board, target: DropTarget) -> bool {
    let Some(pickup) = board.pickup() else {
        return false;
    };
    let candidate = board.held_cards();

    match target {
        DropTarget::Tableau { column, row } => {
            if pickup.source.kind == PileKind::Tableau && pickup.source.column == column {
                debug!("[Rules Validation] Dropping back onto its own column {}.", column);
                return false;
            }
            match target_chain(board, column, row) {
                Some(chain) => tableau_can_accept(chain, candidate),
                None => {
                    debug!("[Rules Validation] No tableau card at ({}, {}).", column, row);
                    false
                }
            }
        }
        DropTarget::Foundation(slot) => {
            if slot >= FOUNDATION_SLOTS {
                debug!("[Rules Validation] Invalid foundation index: {}", slot);
                return false;
            }
            if pickup.source.kind == PileKind::Foundation && pickup.source.column == slot {
                return false;
            }
            foundation_can_accept(board.foundation(slot), candidate)
        }
    }
}

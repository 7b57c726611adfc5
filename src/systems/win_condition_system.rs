// src/systems/win_condition_system.rs

use log::info;

use crate::board::Board;
use crate::components::game_state::GameStatus;
use crate::logic::rules::{check_win_condition, foundations_complete};
use crate::system::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4 つの組札が全部 King まで積み上がっていたら `GameStatus::Won`、そうでなければ
/// `GameStatus::Playing`。勝っても盤面はロックしない。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    fn check_win_condition(&self, board: &Board) -> bool {
        foundations_complete(board.foundations())
            && check_win_condition(board.foundation_card_count())
    }
}

impl System for WinConditionSystem {
    /// 毎回組札を見て状態を決め直す。King を場札に戻したら `Playing` に戻る。
    fn run(&mut self, board: &mut Board) {
        let status = if self.check_win_condition(board) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        if status != board.status {
            info!("WinConditionSystem: {:?} -> {:?}", board.status, status);
            if status == GameStatus::Won {
                info!("WinConditionSystem: 勝利条件達成！🏆");
            }
        }
        board.status = status;
    }
}

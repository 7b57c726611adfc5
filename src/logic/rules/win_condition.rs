//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::{Card, Rank};

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == 52
}

/// 4 つの組札の一番上が全部 King ならクリア。
pub fn foundations_complete(foundations: &[Option<Card>]) -> bool {
    foundations.len() == 4
        && foundations
            .iter()
            .all(|slot| slot.as_ref().map_or(false, |c| c.active && c.rank == Rank::King))
}

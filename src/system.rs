// src/system.rs

use crate::board::Board;

/// System（システム）トレイトだよ！
///
/// 盤面全体を見て後始末をするロジック (場札の一番上を表にする、勝利判定をする、など)
/// をひとまとめにする。カードが動いた後に `SolitaireGame` から順番に呼ばれる。
pub trait System {
    /// このシステムを実行するよ！
    fn run(&mut self, board: &mut Board);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    /// 山札を全部捨て札に移すだけのダミーシステム
    struct SweepStockSystem;

    impl System for SweepStockSystem {
        fn run(&mut self, board: &mut Board) {
            let mut stock = std::mem::take(&mut board.stock);
            board.waste.append(&mut stock);
            board.relabel_waste();
        }
    }

    #[test]
    fn dummy_system_runs_and_modifies_board() {
        let mut board = Board::new();
        board.stock = vec![Card::new(Suit::Club, Rank::Two), Card::new(Suit::Club, Rank::Three)];
        let mut systems: Vec<Box<dyn System>> = vec![Box::new(SweepStockSystem)];

        for system in systems.iter_mut() {
            system.run(&mut board);
        }

        assert!(board.stock().is_empty());
        assert_eq!(board.waste().len(), 2);
        assert!(board.locations_consistent());
        println!("ダミーシステムのテスト、成功！🎉");
    }
}

// src/systems/deal_system.rs

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::{CardLocation, TABLEAU_COLUMNS};
use crate::logic::deck::{create_standard_deck, shuffle_deck};

/// 初期カード配置システム！
///
/// ゲーム開始時 (とリセット時) に、山札と7つの場札にカードを配る。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    pub fn new() -> Self {
        Self
    }

    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// 1. 新しい52枚のデッキを作ってシャッフルする
    /// 2. 前のゲームのカードを全部片付ける
    /// 3. 場札 c 列目 (0 始まり) に c+1 枚配る。一番上だけ表向き
    /// 4. 残り 24 枚を配った順に山札へ
    pub fn execute<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        let mut deck_cards = create_standard_deck();
        shuffle_deck(&mut deck_cards, rng);
        info!("Deck created and shuffled ({} cards).", deck_cards.len());

        board.clear();

        let mut card_iterator = deck_cards.into_iter();

        // --- 場札 (Tableau) への配置 ---
        for (column, cards) in board.tableau.iter_mut().enumerate() {
            cards.extend(
                card_iterator
                    .by_ref()
                    .take(column + 1)
                    .enumerate()
                    .map(|(row, card)| Card {
                        location: CardLocation::tableau(column, row),
                        ..card.into_tableau(row == column)
                    }),
            );
        }
        let dealt: usize = board.tableau.iter().map(Vec::len).sum();
        info!("Dealt {} cards to {} tableau columns.", dealt, TABLEAU_COLUMNS);

        // --- 山札 (Stock) への配置 ---
        board.stock.extend(card_iterator.map(Card::without_tableau_state));
        board.relabel_stock();
        info!("Placed {} cards on the stock.", board.stock.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_state::GameStatus;
    use crate::components::pickup::Pickup;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_initial_deal() {
        let mut board = Board::new();
        DealInitialCardsSystem::new().execute(&mut board, &mut StdRng::seed_from_u64(2024));

        // 合計52枚、重複なし
        let mut unique_cards = HashSet::new();
        let all_cards = board
            .stock()
            .iter()
            .chain(board.tableau_columns().iter().flatten());
        for card in all_cards {
            assert!(unique_cards.insert((card.suit, card.rank)), "重複カード発見！ {:?}", card);
        }
        assert_eq!(unique_cards.len(), 52);

        // 山札 24 枚、全部裏向き扱い (場札の向き情報なし)
        assert_eq!(board.stock().len(), 24, "山札のカード枚数が24枚ではありません！");
        assert!(board.stock().iter().all(|c| c.visible.is_none()));

        // 場札 c 列目は c+1 枚で、一番上だけ表向き
        for (column, cards) in board.tableau_columns().iter().enumerate() {
            assert_eq!(cards.len(), column + 1, "場札[{}]の枚数が違います", column);
            for (row, card) in cards.iter().enumerate() {
                assert_eq!(card.visible, Some(row == column), "場札[{}][{}] の向きが違います", column, row);
            }
        }

        // Foundation と Waste は空
        assert!(board.waste().is_empty());
        assert!(board.foundations().iter().all(Option::is_none));
        assert!(board.locations_consistent());
        println!("✅ test_initial_deal 成功！ 🎉");
    }

    #[test]
    fn redeal_replaces_everything() {
        let mut board = Board::new();
        let system = DealInitialCardsSystem::new();
        system.execute(&mut board, &mut StdRng::seed_from_u64(1));

        // 途中の状態をでっち上げる
        let top = board.tableau[0].pop().expect("column 0 has a card");
        board.waste.push(top.without_tableau_state());
        board.relabel_waste();
        board.pickup = Some(Pickup::new(board.waste[0].clone(), CardLocation::waste(0)));
        board.status = GameStatus::Won;

        system.execute(&mut board, &mut StdRng::seed_from_u64(2));
        assert_eq!(board.card_count(), 52);
        assert!(board.waste().is_empty());
        assert!(board.pickup().is_none());
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.tableau(0).len(), 1);
    }

    #[test]
    fn same_seed_same_deal() {
        let mut a = Board::new();
        let mut b = Board::new();
        DealInitialCardsSystem::new().execute(&mut a, &mut StdRng::seed_from_u64(77));
        DealInitialCardsSystem::new().execute(&mut b, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}

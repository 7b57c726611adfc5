// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::iproduct;
use rand::Rng;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートごとに Ace..King の順で並ぶ。生成された時点ではまだどの山にも属していない。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// Fisher–Yates: 最後の index から 1 まで、`[0, i]` から一様に選んだ位置と入れ替える。
/// 乱数生成器は呼び出し側が渡す (シード付きならいつも同じ並びになる)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<_> = deck.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. 全部 active で、場札用の向き情報はまだ無い
        assert!(deck.iter().all(|c| c.active && c.visible.is_none()));
        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        shuffle_deck(&mut shuffled_deck, &mut StdRng::seed_from_u64(12345));

        // シード固定なので 52! 通りの中で元の順番と一致することはまず無い
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない");
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");

        let before: HashSet<_> = initial_deck.iter().map(|c| (c.suit, c.rank)).collect();
        let after: HashSet<_> = shuffled_deck.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_with_same_seed_is_repeatable() {
        let mut a = create_standard_deck();
        let mut b = create_standard_deck();
        shuffle_deck(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle_deck(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_of_tiny_decks_is_a_no_op() {
        let mut empty: Vec<Card> = Vec::new();
        shuffle_deck(&mut empty, &mut StdRng::seed_from_u64(1));
        assert!(empty.is_empty());

        let mut one = vec![create_standard_deck().remove(0)];
        let expected = one.clone();
        shuffle_deck(&mut one, &mut StdRng::seed_from_u64(1));
        assert_eq!(one, expected);
    }
}

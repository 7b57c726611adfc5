//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;
pub use crate::components::card::CardColor;

/// 候補の一番下のカード。空か、unset 済みなら `None` (= カードじゃない)。
pub fn base_card(cards: &[Card]) -> Option<&Card> {
    cards.first().filter(|c| c.active)
}

/// 先頭のカードの上に、本物のカードが 1 枚でも乗っているか。
pub fn has_cards_above(cards: &[Card]) -> bool {
    cards.iter().skip(1).any(|c| c.active)
}

/// `above` を `below` の上に重ねられるか (色違い かつ ランクがちょうど 1 つ下)。
pub fn stacks_on(below: &Card, above: &Card) -> bool {
    below.color() != above.color() && above.rank.next() == Some(below.rank)
}

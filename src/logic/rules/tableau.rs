//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{base_card, has_cards_above, stacks_on};
use crate::components::card::{Card, Rank};

/// 候補のカード一式を、場札の `target` に重ねられるかチェックする。
///
/// `target` は狙った場札のカードから列の一番上までのスライス。空なら空の列で、
/// そこには King だけ置ける。狙ったカードの上にまだ何か乗っているとき、
/// 狙ったカードが Ace のときは置けない。
pub fn tableau_can_accept(target: &[Card], candidate: &[Card]) -> bool {
    let Some(card) = base_card(candidate) else {
        debug!("[Tableau Rule] Candidate is not a card.");
        return false;
    };

    let Some(below) = base_card(target) else {
        let is_king = card.rank == Rank::King;
        debug!("[Tableau Rule] {:?} onto empty column. Is King: {}", card.rank, is_king);
        return is_king;
    };
    if has_cards_above(target) {
        debug!("[Tableau Rule] {:?} {:?} is not exposed.", below.rank, below.suit);
        return false;
    }
    if below.rank == Rank::Ace {
        return false;
    }

    let result = stacks_on(below, card);
    debug!(
        "[Tableau Rule] {:?}({:?}) onto {:?}({:?}): {}",
        card.rank,
        card.color(),
        below.rank,
        below.color(),
        result
    );
    result
}

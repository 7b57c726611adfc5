//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{base_card, has_cards_above};
use crate::components::card::{Card, Rank};

/// 候補のカードを、この組札の一番上 (`top`) に置けるかチェックする。
///
/// `candidate` は持ち上げているカード一式 (先頭が持ち上げたカード)。組札に動かせるのは
/// 1 枚だけなので、上に何か乗っていたらダメ。空の組札には Ace だけ置ける。
pub fn foundation_can_accept(top: Option<&Card>, candidate: &[Card]) -> bool {
    let Some(card) = base_card(candidate) else {
        debug!("[Foundation Rule] Candidate is not a card.");
        return false;
    };
    if has_cards_above(candidate) {
        debug!("[Foundation Rule] {:?} {:?} has cards above it.", card.rank, card.suit);
        return false;
    }

    let result = match top.filter(|c| c.active) {
        None => card.rank == Rank::Ace,
        Some(top) if top.rank == Rank::King => false,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    };
    debug!(
        "[Foundation Rule] {:?} {:?} onto {:?}: {}",
        card.rank,
        card.suit,
        top.map(|t| (t.rank, t.suit)),
        result
    );
    result
}

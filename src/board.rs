// src/board.rs
//! 盤面 (山札・捨て札・組札・場札) とピックアップ状態をまとめて持つ構造体。
//!
//! 描画側やテストは読み取り専用のアクセサで中身を見る。書き換えは
//! `systems` 以下のシステムだけが `pub(crate)` のヘルパー経由で行う。

use crate::components::card::{previous_foundation_card, Card};
use crate::components::game_state::GameStatus;
use crate::components::pickup::Pickup;
use crate::components::stack::{CardLocation, PileKind, FOUNDATION_SLOTS, TABLEAU_COLUMNS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// 山札。最後の要素が一番上。
    pub(crate) stock: Vec<Card>,
    /// 捨て札。最後の要素が一番上。
    pub(crate) waste: Vec<Card>,
    /// 組札。一番上のカードだけ持つ (その下はランク - 1 で分かる)。
    pub(crate) foundations: [Option<Card>; FOUNDATION_SLOTS],
    /// 場札。index 0 が一番奥、最後の要素が一番上 (表向き)。
    pub(crate) tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub(crate) pickup: Option<Pickup>,
    pub(crate) status: GameStatus,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // --- 読み取り用 ---

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundations(&self) -> &[Option<Card>] {
        &self.foundations
    }

    pub fn foundation(&self, slot: usize) -> Option<&Card> {
        self.foundations.get(slot).and_then(Option::as_ref)
    }

    pub fn tableau_columns(&self) -> &[Vec<Card>] {
        &self.tableau
    }

    /// 列番号が範囲外なら空スライス。
    pub fn tableau(&self, column: usize) -> &[Card] {
        self.tableau.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 列の一番上 (表向きになっているはずのカード)。
    pub fn tableau_top(&self, column: usize) -> Option<&Card> {
        self.tableau(column).last()
    }

    pub fn pickup(&self) -> Option<&Pickup> {
        self.pickup.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.pickup.is_some()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 指定した場所にある本物のカード。無ければ `None`。
    pub fn card_at(&self, location: CardLocation) -> Option<&Card> {
        let card = match location.kind {
            PileKind::Stock => self.stock.get(location.column),
            PileKind::Waste => self.waste.get(location.column),
            PileKind::Foundation => self.foundation(location.column),
            PileKind::Tableau => self.tableau(location.column).get(location.row),
        };
        card.filter(|c| c.active)
    }

    /// 持ち上げ中のカード一式。場札ならそのカードから列の一番上まで、
    /// それ以外は 1 枚。持っていなければ空。
    pub fn held_cards(&self) -> &[Card] {
        let Some(pickup) = self.pickup.as_ref() else {
            return &[];
        };
        let source = pickup.source;
        match source.kind {
            PileKind::Tableau => {
                let column = self.tableau(source.column);
                match column.iter().position(|c| c.same_identity(&pickup.card)) {
                    Some(row) => &column[row..],
                    None => &[],
                }
            }
            PileKind::Waste => self
                .waste
                .iter()
                .position(|c| c.same_identity(&pickup.card))
                .map(|i| std::slice::from_ref(&self.waste[i]))
                .unwrap_or(&[]),
            PileKind::Foundation => self
                .foundation(source.column)
                .filter(|c| c.same_identity(&pickup.card))
                .map(std::slice::from_ref)
                .unwrap_or(&[]),
            PileKind::Stock => &[],
        }
    }

    /// 組札に今見えているカード。その組札の一番上を持ち上げている間は、
    /// 一つ下のランクのカードを代わりに返す (盤面は書き換えない)。
    pub fn foundation_preview(&self, slot: usize) -> Option<Card> {
        let top = self.foundation(slot);
        match &self.pickup {
            Some(pickup)
                if pickup.source.kind == PileKind::Foundation && pickup.source.column == slot =>
            {
                previous_foundation_card(top)
            }
            _ => top.cloned(),
        }
    }

    /// 組札に積まれている枚数の合計 (一番上のランク = 枚数)。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations
            .iter()
            .flatten()
            .filter(|c| c.active)
            .map(|c| usize::from(c.rank.value()))
            .sum()
    }

    /// 盤面にあるカードの総数。組札は積まれている枚数で数える。
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundation_card_count()
    }

    // --- システム用の書き換えヘルパー ---

    /// 全部の山を空にする。古いカードは unset してから捨てる。
    pub(crate) fn clear(&mut self) {
        for column in self.tableau.iter_mut() {
            column.iter_mut().for_each(Card::unset);
            column.clear();
        }
        for slot in self.foundations.iter_mut() {
            *slot = None;
        }
        self.stock.clear();
        self.waste.clear();
        self.pickup = None;
        self.status = GameStatus::Playing;
    }

    pub(crate) fn relabel_stock(&mut self) {
        for (i, card) in self.stock.iter_mut().enumerate() {
            card.location = CardLocation::stock(i);
        }
    }

    pub(crate) fn relabel_waste(&mut self) {
        for (i, card) in self.waste.iter_mut().enumerate() {
            card.location = CardLocation::waste(i);
        }
    }

    /// 列のカード全部に列番号と行番号を振り直す。
    pub(crate) fn relabel_tableau(&mut self, column: usize) {
        if let Some(cards) = self.tableau.get_mut(column) {
            for (row, card) in cards.iter_mut().enumerate() {
                card.location = CardLocation::tableau(column, row);
            }
        }
    }

    /// 全カードの `location` が実際の居場所と一致しているか。
    pub fn locations_consistent(&self) -> bool {
        let stock_ok = self
            .stock
            .iter()
            .enumerate()
            .all(|(i, c)| c.location == CardLocation::stock(i));
        let waste_ok = self
            .waste
            .iter()
            .enumerate()
            .all(|(i, c)| c.location == CardLocation::waste(i));
        let foundation_ok = self
            .foundations
            .iter()
            .enumerate()
            .all(|(slot, c)| {
                c.as_ref()
                    .map_or(true, |c| c.location == CardLocation::foundation(slot))
            });
        let tableau_ok = self.tableau.iter().enumerate().all(|(column, cards)| {
            cards
                .iter()
                .enumerate()
                .all(|(row, c)| c.location == CardLocation::tableau(column, row))
        });
        stock_ok && waste_ok && foundation_ok && tableau_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn tableau_card(suit: Suit, rank: Rank, column: usize, row: usize, visible: bool) -> Card {
        let mut card = Card::new(suit, rank).into_tableau(visible);
        card.location = CardLocation::tableau(column, row);
        card
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.stock().is_empty());
        assert!(board.waste().is_empty());
        assert!(board.foundations().iter().all(Option::is_none));
        assert!(board.tableau_columns().iter().all(Vec::is_empty));
        assert_eq!(board.card_count(), 0);
        assert!(!board.is_holding());
        assert_eq!(board.status(), GameStatus::Playing);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let board = Board::new();
        assert!(board.tableau(TABLEAU_COLUMNS).is_empty());
        assert_eq!(board.foundation(FOUNDATION_SLOTS), None);
        assert_eq!(board.card_at(CardLocation::tableau(9, 0)), None);
    }

    #[test]
    fn held_cards_cover_the_run_above_the_lifted_card() {
        let mut board = Board::new();
        board.tableau[2] = vec![
            tableau_card(Suit::Club, Rank::Nine, 2, 0, false),
            tableau_card(Suit::Heart, Rank::Eight, 2, 1, true),
            tableau_card(Suit::Spade, Rank::Seven, 2, 2, true),
        ];
        let lifted = board.tableau[2][1].clone();
        board.pickup = Some(Pickup::new(lifted, CardLocation::tableau(2, 1)));

        let held = board.held_cards();
        assert_eq!(held.len(), 2);
        assert_eq!(held[0].rank, Rank::Eight);
        assert_eq!(held[1].rank, Rank::Seven);
    }

    #[test]
    fn foundation_preview_shows_the_card_underneath_while_lifted() {
        let mut board = Board::new();
        let mut three = Card::new(Suit::Heart, Rank::Three);
        three.location = CardLocation::foundation(1);
        board.foundations[1] = Some(three.clone());

        assert_eq!(board.foundation_preview(1).map(|c| c.rank), Some(Rank::Three));

        board.pickup = Some(Pickup::new(three, CardLocation::foundation(1)));
        assert_eq!(board.foundation_preview(1).map(|c| c.rank), Some(Rank::Two));
        // 本物の組札はそのまま
        assert_eq!(board.foundation(1).map(|c| c.rank), Some(Rank::Three));
        assert_eq!(board.foundation_card_count(), 3);
    }

    #[test]
    fn clear_unsets_everything() {
        let mut board = Board::new();
        board.tableau[0] = vec![tableau_card(Suit::Spade, Rank::King, 0, 0, true)];
        board.stock = vec![Card::new(Suit::Heart, Rank::Two)];
        board.status = GameStatus::Won;

        board.clear();
        assert_eq!(board.card_count(), 0);
        assert_eq!(board.status(), GameStatus::Playing);
    }

    #[test]
    fn relabel_keeps_locations_consistent() {
        let mut board = Board::new();
        board.waste = vec![Card::new(Suit::Club, Rank::Ace), Card::new(Suit::Club, Rank::Two)];
        board.stock = vec![Card::new(Suit::Club, Rank::Three)];
        board.tableau[4] = vec![Card::new(Suit::Club, Rank::Four).into_tableau(true)];
        assert!(!board.locations_consistent());

        board.relabel_waste();
        board.relabel_stock();
        board.relabel_tableau(4);
        assert!(board.locations_consistent());
        assert_eq!(board.waste()[1].location, CardLocation::waste(1));
        assert_eq!(board.tableau(4)[0].location, CardLocation::tableau(4, 0));
    }
}

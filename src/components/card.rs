// src/components/card.rs

// serde を使う宣言！盤面のスナップショットを JS 側に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};

use crate::components::stack::CardLocation;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `PartialOrd`, `Ord` 付きなので `<` や `>` で大小比較できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// デッキ生成でループするための全スート。配る順番もこの順。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランク (Ace..King)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）だよ。場札に重ねるときは色違いが条件！
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    /// 画像 ID ("CardHeartsAce") に使う複数形の名前。
    fn resource_label(self) -> &'static str {
        match self {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Spade => "Spades",
        }
    }
}

impl Rank {
    /// 1 (Ace) ..= 13 (King)
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// 一つ上のランク。King の上は `None`。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// 一つ下のランク。Ace の下は `None`。
    pub fn previous(self) -> Option<Rank> {
        Rank::from_value(self.value().checked_sub(1)?)
    }

    fn resource_label(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// 裏向きの場札カードに描画側が使う画像 ID。
pub const FACE_DOWN_RESOURCE: &str = "CardFlipped";

/// カードそのものだよ！🃏
///
/// - `suit` / `rank`: 一度配られたら変わらないカードの正体
/// - `active`: 場にあるカードなら true。`unset` されたカードは false
/// - `location`: 今どの山の何番目にいるか。移動元を探すときに使う
/// - `visible`: 場札 (Tableau) にいる間だけ `Some`。`Some(false)` は裏向き
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub active: bool,
    pub location: CardLocation,
    pub visible: Option<bool>,
}

impl Card {
    /// 場に出ている (active) カードを作る。居場所は仮に山札、場札の向き情報は無し。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            active: true,
            location: CardLocation::stock(0),
            visible: None,
        }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 同じスート・ランクなら同じカード (位置や向きは見ない)。
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Tableau 上で表向きかどうか。Tableau 以外のカードは常に表扱い。
    pub fn is_face_up(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// 場から外す。リセット時に古いカードを片付けるのに使う。
    pub fn unset(&mut self) {
        self.active = false;
        self.visible = None;
    }

    /// Tableau 用の状態を付ける (向きを指定)。
    pub fn into_tableau(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Tableau 用の状態を外す (Waste / Foundation / Stock 用)。
    pub fn without_tableau_state(mut self) -> Self {
        self.visible = None;
        self
    }

    pub fn resource_name(&self) -> Option<String> {
        if !self.active {
            return None;
        }
        if self.visible == Some(false) {
            return Some(FACE_DOWN_RESOURCE.to_string());
        }
        Some(format!(
            "Card{}{}",
            self.suit.resource_label(),
            self.rank.resource_label()
        ))
    }
}

/// `Some` かつ active なら本物のカード。
pub fn is_card(card: Option<&Card>) -> bool {
    card.map_or(false, |c| c.active)
}

/// 描画側が使う画像 ID。カードじゃなければ `None`。
pub fn resource_name(card: Option<&Card>) -> Option<String> {
    card.filter(|c| c.active).and_then(Card::resource_name)
}

/// 組札の一番上を持ち上げたときに「その下に見えるカード」を作る。
///
/// ランクを一つ下げた同じスートのカードを新しく作って返すだけで、
/// どの山にも書き込まない。Ace の下には何もないので `None`。
pub fn previous_foundation_card(card: Option<&Card>) -> Option<Card> {
    let card = card.filter(|c| c.active)?;
    let rank = card.rank.previous()?;
    Some(Card {
        suit: card.suit,
        rank,
        active: true,
        location: card.location,
        visible: None,
    })
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn rank_neighbours() {
        assert_eq!(Rank::Ace.previous(), None);
        assert_eq!(Rank::Ace.next(), Some(Rank::Two));
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::Jack.previous(), Some(Rank::Ten));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn card_color_from_suit() {
        assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
        assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    }

    #[test]
    fn is_card_needs_an_active_card() {
        let mut card = Card::new(Suit::Spade, Rank::Five);
        assert!(is_card(Some(&card)));
        assert!(!is_card(None));
        card.unset();
        assert!(!is_card(Some(&card)));
        assert_eq!(resource_name(Some(&card)), None);
    }

    #[test]
    fn resource_names() {
        let ace = Card::new(Suit::Heart, Rank::Ace);
        assert_eq!(resource_name(Some(&ace)).as_deref(), Some("CardHeartsAce"));

        let ten = Card::new(Suit::Club, Rank::Ten);
        assert_eq!(ten.resource_name().as_deref(), Some("CardClubs10"));

        let hidden = Card::new(Suit::Spade, Rank::Queen).into_tableau(false);
        assert_eq!(hidden.resource_name().as_deref(), Some(FACE_DOWN_RESOURCE));

        let shown = hidden.clone().into_tableau(true);
        assert_eq!(shown.resource_name().as_deref(), Some("CardSpadesQueen"));
        assert_eq!(resource_name(None), None);
    }

    #[test]
    fn previous_foundation_card_is_one_rank_lower() {
        let three = Card::new(Suit::Diamond, Rank::Three);
        let two = previous_foundation_card(Some(&three)).expect("Three の下は Two のはず");
        assert_eq!(two.suit, Suit::Diamond);
        assert_eq!(two.rank, Rank::Two);
        assert!(two.active);

        let ace = Card::new(Suit::Diamond, Rank::Ace);
        assert_eq!(previous_foundation_card(Some(&ace)), None);
        assert_eq!(previous_foundation_card(None), None);
    }
}

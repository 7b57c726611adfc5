// src/protocol.rs

// このファイルは、Rust 側の盤面を JS 側 (描画・入力担当) に渡すときの
// データ形式を定義するよ！💌
// `Serialize` で Rust のデータ構造 -> JSON 文字列、
// `Deserialize` で JSON 文字列 -> Rust のデータ構造。
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::pickup::Pickup;
use crate::components::stack::CardLocation;

/// 盤面全体のスナップショット。JS 側はこれだけ見れば描画できる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardStateData {
    /// 山札。最後が一番上。
    pub stock: Vec<CardData>,
    /// 捨て札。最後が一番上。
    pub waste: Vec<CardData>,
    /// 組札 4 つ。持ち上げ中の組札は一つ下のカードが見える。
    pub foundations: Vec<Option<CardData>>,
    /// 場札 7 列。各列 index 0 が一番奥。
    pub tableau: Vec<Vec<CardData>>,
    pub pickup: Option<PickupData>,
    pub status: GameStatus,
}

/// カード1枚の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    /// 場札のカードだけ `Some`。
    pub visible: Option<bool>,
    pub location: CardLocation,
    /// 描画側が使う画像 ID ("CardHeartsAce", 裏向きなら "CardFlipped")。
    pub resource: Option<String>,
}

/// 持ち上げ中のカードの情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PickupData {
    pub source: CardLocation,
    /// 一緒に動くカード全部 (一番下が先頭)。
    pub cards: Vec<CardData>,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            visible: card.visible,
            location: card.location,
            resource: card.resource_name(),
        }
    }
}

impl BoardStateData {
    pub fn from_board(board: &Board) -> Self {
        let cards = |cards: &[Card]| cards.iter().map(CardData::from).collect::<Vec<_>>();
        Self {
            stock: cards(board.stock()),
            waste: cards(board.waste()),
            foundations: (0..board.foundations().len())
                .map(|slot| board.foundation_preview(slot).as_ref().map(CardData::from))
                .collect(),
            tableau: board
                .tableau_columns()
                .iter()
                .map(|column| cards(column.as_slice()))
                .collect(),
            pickup: board.pickup().map(|pickup: &Pickup| PickupData {
                source: pickup.source,
                cards: cards(board.held_cards()),
            }),
            status: board.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::DealInitialCardsSystem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_mirrors_the_board() {
        let mut board = Board::new();
        DealInitialCardsSystem::new().execute(&mut board, &mut StdRng::seed_from_u64(4));

        let data = BoardStateData::from_board(&board);
        assert_eq!(data.stock.len(), 24);
        assert_eq!(data.foundations, vec![None, None, None, None]);
        assert_eq!(data.tableau.len(), 7);
        assert_eq!(data.tableau[6].len(), 7);
        assert_eq!(data.tableau[6][0].resource.as_deref(), Some("CardFlipped"));
        assert_ne!(data.tableau[6][6].resource.as_deref(), Some("CardFlipped"));
        assert!(data.pickup.is_none());
        assert_eq!(data.status, GameStatus::Playing);

        let json = serde_json::to_string(&data).expect("snapshot serializes");
        let back: BoardStateData = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(back, data);
        println!("スナップショットテスト、成功！🎉");
    }
}

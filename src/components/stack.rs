// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

/// 場札 (Tableau) の列数。
pub const TABLEAU_COLUMNS: usize = 7;
/// 組札 (Foundation) の置き場の数。
pub const FOUNDATION_SLOTS: usize = 4;

/// カードが存在する山の種類を示す Enum だよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// 山札。裏向きで積まれている。
    Stock,
    /// 山札からめくったカードを置く場所。
    Waste,
    /// 組札。Ace から King まで同じスートで積み上げる。
    Foundation,
    /// 場札。7 列ある。
    Tableau,
}

/// カードの居場所。山の種類 + 列番号 + 行番号。
///
/// - Stock / Waste: `column` はその山の中での順番 (0 が一番下)、`row` は 0
/// - Foundation: `column` は置き場の番号 (0-3)、`row` は 0
/// - Tableau: `column` は列番号 (0-6)、`row` は列の中での順番 (0 が一番奥)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardLocation {
    pub kind: PileKind,
    pub column: usize,
    pub row: usize,
}

impl CardLocation {
    pub fn new(kind: PileKind, column: usize, row: usize) -> Self {
        Self { kind, column, row }
    }

    pub fn stock(index: usize) -> Self {
        Self::new(PileKind::Stock, index, 0)
    }

    pub fn waste(index: usize) -> Self {
        Self::new(PileKind::Waste, index, 0)
    }

    pub fn foundation(slot: usize) -> Self {
        Self::new(PileKind::Foundation, slot, 0)
    }

    pub fn tableau(column: usize, row: usize) -> Self {
        Self::new(PileKind::Tableau, column, row)
    }
}

/// ドロップ先の指定。盤面への参照ではなく「どこか」を表す値だけを渡す。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// `row` は狙ったカードの位置。空の列なら何を渡しても列そのものが対象。
    Tableau { column: usize, row: usize },
    Foundation(usize),
}

impl CardLocation {
    /// 置き場として指せる場所なら `DropTarget` に変換する。Stock / Waste へは置けない。
    pub fn as_drop_target(&self) -> Option<DropTarget> {
        match self.kind {
            PileKind::Tableau => Some(DropTarget::Tableau {
                column: self.column,
                row: self.row,
            }),
            PileKind::Foundation => Some(DropTarget::Foundation(self.column)),
            PileKind::Stock | PileKind::Waste => None,
        }
    }
}

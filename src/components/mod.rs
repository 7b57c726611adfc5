// src/components/mod.rs

// 盤面を組み立てる部品たち。
pub mod card;
pub mod game_state;
pub mod pickup;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use game_state::GameStatus;
pub use pickup::Pickup;
pub use stack::{CardLocation, DropTarget, PileKind};

// src/systems/mod.rs
//! 盤面を書き換えるシステムたち。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod visibility_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
pub use stock_system::draw_stock;
pub use visibility_system::{show_visible_cards, VisibilitySystem};
pub use win_condition_system::WinConditionSystem;

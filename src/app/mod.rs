// src/app/mod.rs
//! JS 側との窓口。

pub mod game_app;
pub mod state_getter;

pub use game_app::SolitaireApp;

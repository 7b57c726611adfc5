// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod game;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;

pub use app::SolitaireApp;
pub use board::Board;
pub use components::{
    Card, CardColor, CardLocation, DropTarget, GameStatus, Pickup, PileKind, Rank, Suit,
};
pub use config::{DrawMode, GameConfig};
pub use game::SolitaireGame;
pub use logic::rules::{foundation_can_accept, tableau_can_accept};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("Panic hook and logger set!");
}

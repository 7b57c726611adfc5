// src/app/game_app.rs

use js_sys::Error;
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::stack::CardLocation;
use crate::config::{DrawMode, GameConfig};
use crate::game::SolitaireGame;

fn js_error(message: String) -> JsValue {
    error!("{}", message);
    JsValue::from(Error::new(&message))
}

/// JS から受け取った場所 (JSON) を `CardLocation` にする。
fn parse_location(location_json: &str) -> Result<CardLocation, JsValue> {
    serde_json::from_str::<CardLocation>(location_json).map_err(|e| {
        js_error(format!("Failed to deserialize location: {}. JSON: {}", e, location_json))
    })
}

// --- JS 側 (描画・入力担当) から使うゲーム本体の窓口 ---
#[wasm_bindgen]
pub struct SolitaireApp {
    game: SolitaireGame,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `config_json` は `{"draw_mode": "Three", "seed": 42}` みたいな JSON (省略可)。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SolitaireApp, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)
                .map_err(|e| js_error(format!("Invalid game config: {}. JSON: {}", e, json)))?,
            None => GameConfig::default(),
        };
        info!("SolitaireApp: Initializing with {:?}", config);
        Ok(Self { game: SolitaireGame::new(config) })
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// 設定の枚数で山札をめくる。
    pub fn draw(&mut self) -> bool {
        self.game.draw()
    }

    pub fn draw_stock(&mut self, count: usize) -> bool {
        self.game.draw_stock(count)
    }

    pub fn set_draw_three(&mut self, draw_three: bool) {
        let mode = if draw_three { DrawMode::Three } else { DrawMode::One };
        self.game.set_draw_mode(mode);
    }

    pub fn begin_pickup(&mut self, location_json: &str) -> Result<bool, JsValue> {
        let location = parse_location(location_json)?;
        Ok(self.game.begin_pickup(location))
    }

    pub fn begin_pickup_tableau(&mut self, column: usize, row: usize) -> bool {
        self.game.begin_pickup(CardLocation::tableau(column, row))
    }

    /// 捨て札の一番上を持ち上げる。
    pub fn begin_pickup_waste(&mut self) -> bool {
        match self.game.waste().len().checked_sub(1) {
            Some(top) => self.game.begin_pickup(CardLocation::waste(top)),
            None => false,
        }
    }

    pub fn begin_pickup_foundation(&mut self, index: usize) -> bool {
        self.game.begin_pickup(CardLocation::foundation(index))
    }

    /// 描画側が当たり判定で見つけたカード (または空き場所) の上にドロップする。
    pub fn drop_at(&mut self, location_json: &str) -> Result<bool, JsValue> {
        let location = parse_location(location_json)?;
        Ok(self.game.drop_at(location))
    }

    pub fn drop_on_tableau(&mut self, column: usize, row: usize) -> bool {
        self.game.drop_on_tableau(column, row)
    }

    pub fn drop_on_foundation(&mut self, index: usize) -> bool {
        self.game.drop_on_foundation(index)
    }

    pub fn cancel_pickup(&mut self) {
        self.game.cancel_pickup();
    }

    /// ダブルクリックされたカードを組札へ送る。
    pub fn handle_double_click(&mut self, location_json: &str) -> Result<bool, JsValue> {
        let location = parse_location(location_json)?;
        Ok(self.game.auto_move_to_foundation(location))
    }

    pub fn can_drop_on_tableau(&self, column: usize, row: usize) -> bool {
        self.game.can_drop_on_tableau(column, row)
    }

    pub fn can_drop_on_foundation(&self, index: usize) -> bool {
        self.game.can_drop_on_foundation(index)
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// 盤面全体を JSON で返す。描画側はこれを毎フレーム読む。
    pub fn get_board_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::board_state_json(&self.game)
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| js_error(format!("Failed to serialize board state: {}", e)))
    }
}

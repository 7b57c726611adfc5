//! Gets the current board state from the game and converts it to JSON.

use log::{debug, error};

use crate::game::SolitaireGame;
use crate::protocol::BoardStateData;

/// 盤面の状態を取得し、JSON 文字列として返します。
pub fn board_state_json(game: &SolitaireGame) -> Result<String, serde_json::Error> {
    let state = BoardStateData::from_board(game.board());
    debug!(
        "Collected board state: stock {}, waste {}, holding {}.",
        state.stock.len(),
        state.waste.len(),
        state.pickup.is_some()
    );

    serde_json::to_string(&state).map_err(|e| {
        error!("Failed to serialize board state: {}", e);
        e
    })
}

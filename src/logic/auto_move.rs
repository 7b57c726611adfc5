// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! ダブルクリックされたカードを、どの組札に送れるかを探す。

use log::debug;

use crate::board::Board;
use crate::components::stack::{CardLocation, PileKind, FOUNDATION_SLOTS};
use crate::logic::rules;

/// `location` にあるカードを置ける組札の番号を探す。
///
/// 受け入れてくれる最初の組札を返す。場札のカードは一番上のものだけが対象。
/// 盤面は変更しない。
pub fn find_automatic_foundation_move(board: &Board, location: CardLocation) -> Option<usize> {
    debug!("[AutoMove] Finding automatic foundation move for {:?}...", location);

    let candidate = match location.kind {
        PileKind::Tableau => {
            let is_top = location.row + 1 == board.tableau(location.column).len();
            std::slice::from_ref(board.tableau_top(location.column).filter(|_| is_top)?)
        }
        PileKind::Waste | PileKind::Foundation => {
            std::slice::from_ref(board.card_at(location)?)
        }
        PileKind::Stock => return None,
    };
    if !candidate[0].is_face_up() {
        return None;
    }

    let found = (0..FOUNDATION_SLOTS)
        .filter(|&slot| !(location.kind == PileKind::Foundation && location.column == slot))
        .find(|&slot| rules::foundation_can_accept(board.foundation(slot), candidate));

    match found {
        Some(slot) => debug!("  Found valid foundation [{}] for {:?}.", slot, location),
        None => debug!("  No suitable foundation found for {:?}.", location),
    }
    found
}

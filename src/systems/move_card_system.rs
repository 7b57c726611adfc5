// src/systems/move_card_system.rs

use log::{debug, error, info, warn};

use crate::board::Board;
use crate::components::card::{previous_foundation_card, Card};
use crate::components::pickup::Pickup;
use crate::components::stack::{CardLocation, DropTarget, PileKind};
use crate::logic::rules;
use crate::systems::visibility_system::show_visible_cards;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 持ち上げ中のカード (`Board::pickup`) を受け取った置き場に置けるかルールで
/// チェックして、置けるなら移動を確定させる。置けなくてもピックアップは解除する
/// (失敗したドロップはキャンセルと同じ)。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// ドロップを試す。移動したら true。
    ///
    /// 呼び出し側がピックアップ中であることを確認済みの前提。
    pub fn execute(&self, board: &mut Board, target: DropTarget) -> bool {
        let Some(pickup) = board.pickup.clone() else {
            return false;
        };
        debug!("MoveCardSystem: {:?} from {:?} -> {:?}", pickup.card.rank, pickup.source, target);

        if !rules::is_move_valid(board, target) {
            warn!("  ルール違反！移動できませんでした。🙅‍♀️ ({:?} -> {:?})", pickup.source, target);
            board.pickup = None;
            return false;
        }

        let moved = board.held_cards().to_vec();
        match target {
            DropTarget::Tableau { column, .. } => {
                Self::attach_to_tableau(board, column, &pickup, moved)
            }
            DropTarget::Foundation(slot) => Self::attach_to_foundation(board, slot, moved),
        }
        Self::remove_old_move(board, &pickup);

        board.pickup = None;
        show_visible_cards(board);
        info!("  移動成功！ {:?} -> {:?}", pickup.source, target);
        true
    }

    /// 場札の列の一番上に積む。捨て札や組札から来たカードは表向きの場札カードになる。
    fn attach_to_tableau(board: &mut Board, column: usize, pickup: &Pickup, moved: Vec<Card>) {
        let from_tableau = pickup.source.kind == PileKind::Tableau;
        let Some(cards) = board.tableau.get_mut(column) else {
            return;
        };
        cards.extend(moved.into_iter().map(|card| {
            if from_tableau {
                card
            } else {
                card.into_tableau(true)
            }
        }));
        board.relabel_tableau(column);
    }

    /// 組札の一番上を置き換える。置けるのは 1 枚だけ (ルールチェック済み)。
    fn attach_to_foundation(board: &mut Board, slot: usize, moved: Vec<Card>) {
        let Some(card) = moved.into_iter().next() else {
            return;
        };
        if let Some(top) = board.foundations.get_mut(slot) {
            *top = Some(Card {
                location: CardLocation::foundation(slot),
                ..card.without_tableau_state()
            });
        }
    }

    /// 移動元からカードを取り除く。ここで初めて元の山が書き換わる。
    fn remove_old_move(board: &mut Board, pickup: &Pickup) {
        let source = pickup.source;
        match source.kind {
            PileKind::Tableau => {
                let column = source.column;
                let position = board
                    .tableau
                    .get(column)
                    .and_then(|cards| cards.iter().position(|c| c.same_identity(&pickup.card)));
                match position {
                    Some(row) => {
                        board.tableau[column].truncate(row);
                        board.relabel_tableau(column);
                    }
                    None => error!(
                        "Source card {:?} not found in tableau column {}",
                        pickup.card, column
                    ),
                }
            }
            PileKind::Foundation => {
                let slot = source.column;
                if let Some(top) = board.foundations.get_mut(slot) {
                    *top = previous_foundation_card(top.as_ref()).map(|card| Card {
                        location: CardLocation::foundation(slot),
                        ..card
                    });
                }
            }
            PileKind::Waste => {
                match board.waste.iter().position(|c| c.same_identity(&pickup.card)) {
                    Some(index) => {
                        board.waste.remove(index);
                        board.relabel_waste();
                    }
                    None => error!("Source card {:?} not found in waste", pickup.card),
                }
            }
            PileKind::Stock => error!("Cards are never picked up from the stock: {:?}", source),
        }
    }
}

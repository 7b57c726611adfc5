// src/game.rs
//! ソリティアのゲーム本体！🃏
//!
//! 入力側 (JS) から呼ばれるコマンドはここに全部集まる:
//! リセット、山札をめくる、カードを持ち上げる、置く、キャンセル。
//! 盤面そのものは `Board`、書き換えは `systems` 以下のシステムの担当。

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pickup::Pickup;
use crate::components::stack::{CardLocation, DropTarget, PileKind};
use crate::config::{DrawMode, GameConfig};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::system::System;
use crate::systems::{
    self, DealInitialCardsSystem, MoveCardSystem, VisibilitySystem, WinConditionSystem,
};

/// 内部状態のズレ (持っていないのにドロップ、存在しないカードを持ち上げ等)。
/// `strict` ビルドでは panic、それ以外はエラーログだけ出して呼び出し側が false を返す。
fn report_desync(message: &str) {
    error!("{}", message);
    if cfg!(feature = "strict") {
        panic!("{}", message);
    }
}

pub struct SolitaireGame {
    config: GameConfig,
    board: Board,
    rng: StdRng,
    /// カードが動いた後に順番に実行するシステム
    systems: Vec<Box<dyn System>>,
}

impl SolitaireGame {
    /// 新しいゲームを作って、すぐに最初の配札まで済ませる。
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self {
            config,
            board: Board::new(),
            rng,
            systems: vec![
                Box::new(VisibilitySystem::new()),
                Box::new(WinConditionSystem::new()),
            ],
        };
        game.reset();
        game
    }

    /// 全部片付けて配り直す。
    pub fn reset(&mut self) {
        info!("🔄 Resetting game (draw mode: {:?})", self.config.draw_mode);
        DealInitialCardsSystem::new().execute(&mut self.board, &mut self.rng);
        self.run_systems();
    }

    fn run_systems(&mut self) {
        for system in self.systems.iter_mut() {
            system.run(&mut self.board);
        }
    }

    // --- コマンド ---

    /// 山札を `count` 枚めくる (空なら捨て札を戻す)。持ち上げ中ならキャンセルしてから。
    pub fn draw_stock(&mut self, count: usize) -> bool {
        if self.board.is_holding() {
            debug!("Drawing while holding a card, cancelling the pickup first.");
            self.cancel_pickup();
        }
        systems::draw_stock(&mut self.board, count)
    }

    /// 設定の枚数 (1 or 3) で山札をめくる。
    pub fn draw(&mut self) -> bool {
        self.draw_stock(self.config.draw_mode.count())
    }

    /// `location` のカードを持ち上げる。持ち上げたら true。
    ///
    /// 既に持ち上げ中、山札のカード、裏向きの場札、捨て札の一番上以外は何もしない。
    pub fn begin_pickup(&mut self, location: CardLocation) -> bool {
        if self.board.is_holding() {
            warn!("Already holding a card, ignoring pickup at {:?}", location);
            return false;
        }
        if location.kind == PileKind::Stock {
            warn!("Stock cards cannot be picked up: {:?}", location);
            return false;
        }
        let Some(card) = self.board.card_at(location).cloned() else {
            report_desync(&format!("No card at pickup location {:?}", location));
            return false;
        };
        if !card.is_face_up() {
            warn!("Face-down card at {:?} cannot be picked up", location);
            return false;
        }
        if location.kind == PileKind::Waste && location.column + 1 != self.board.waste().len() {
            warn!("Only the top waste card can be picked up, not {:?}", location);
            return false;
        }

        info!("✋ Picked up {:?} {:?} from {:?}", card.rank, card.suit, location);
        self.board.pickup = Some(Pickup::new(card, location));
        true
    }

    /// 持ち上げ中のカードを `target` に置く。置けなくてもピックアップは解除される。
    pub fn attempt_drop(&mut self, target: DropTarget) -> bool {
        if !self.board.is_holding() {
            report_desync(&format!("Drop on {:?} without a pickup", target));
            return false;
        }
        if self.board.held_cards().is_empty() {
            let source = self.board.pickup().map(|p| p.source);
            report_desync(&format!("Held card is no longer at {:?}", source));
            self.board.pickup = None;
            return false;
        }

        let moved = MoveCardSystem::new().execute(&mut self.board, target);
        if moved {
            self.run_systems();
            if self.is_won() {
                info!("🏆 All foundations complete!");
            }
        }
        moved
    }

    /// カードの居場所をそのままドロップ先として使う (描画側がカードを拾ったとき用)。
    /// 山札・捨て札には置けないので false。
    pub fn drop_at(&mut self, location: CardLocation) -> bool {
        match location.as_drop_target() {
            Some(target) => self.attempt_drop(target),
            None => {
                warn!("Cards cannot be dropped on {:?}, cancelling the pickup.", location);
                self.cancel_pickup();
                false
            }
        }
    }

    pub fn drop_on_tableau(&mut self, column: usize, row: usize) -> bool {
        self.attempt_drop(DropTarget::Tableau { column, row })
    }

    pub fn drop_on_foundation(&mut self, index: usize) -> bool {
        self.attempt_drop(DropTarget::Foundation(index))
    }

    /// ピックアップを解除するだけ。山は一切変わらない。何度呼んでも同じ。
    pub fn cancel_pickup(&mut self) {
        if let Some(pickup) = self.board.pickup.take() {
            debug!("Pickup from {:?} cancelled.", pickup.source);
        }
    }

    /// ダブルクリック用: 置ける組札があればそこへ送る。
    pub fn auto_move_to_foundation(&mut self, location: CardLocation) -> bool {
        if self.board.is_holding() {
            warn!("Already holding a card, ignoring auto-move from {:?}", location);
            return false;
        }
        let Some(slot) = find_automatic_foundation_move(&self.board, location) else {
            return false;
        };
        self.begin_pickup(location) && self.drop_on_foundation(slot)
    }

    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) {
        self.config.draw_mode = draw_mode;
    }

    // --- 問い合わせ ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stock(&self) -> &[Card] {
        self.board.stock()
    }

    pub fn waste(&self) -> &[Card] {
        self.board.waste()
    }

    pub fn foundation(&self, index: usize) -> Option<&Card> {
        self.board.foundation(index)
    }

    pub fn tableau(&self, column: usize) -> &[Card] {
        self.board.tableau(column)
    }

    pub fn pickup(&self) -> Option<&Pickup> {
        self.board.pickup()
    }

    pub fn held_cards(&self) -> &[Card] {
        self.board.held_cards()
    }

    pub fn foundation_preview(&self, index: usize) -> Option<Card> {
        self.board.foundation_preview(index)
    }

    /// ハイライト表示用。盤面は変えない。
    pub fn can_drop_on_tableau(&self, column: usize, row: usize) -> bool {
        rules::is_move_valid(&self.board, DropTarget::Tableau { column, row })
    }

    pub fn can_drop_on_foundation(&self, index: usize) -> bool {
        rules::is_move_valid(&self.board, DropTarget::Foundation(index))
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }
}

impl Default for SolitaireGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;

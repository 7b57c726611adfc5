// src/config/game_config.rs
//! ゲームの設定。JS 側から JSON で渡されることもあるので serde 対応。

use serde::{Deserialize, Serialize};

/// 山札から一度にめくる枚数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

/// `#[serde(default)]` なので `{}` や `{"seed": 42}` みたいな部分的な JSON でも OK。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub draw_mode: DrawMode,
    /// 指定するとシャッフルが毎回同じになる (テストやリプレイ用)。
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"seed": 7}"#).expect("valid config");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.draw_mode, DrawMode::One);

        let config = GameConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn draw_mode_from_json() {
        let config = GameConfig::from_json(r#"{"draw_mode": "Three"}"#).expect("valid config");
        assert_eq!(config.draw_mode.count(), 3);
        assert!(GameConfig::from_json(r#"{"draw_mode": "Five"}"#).is_err());
    }
}

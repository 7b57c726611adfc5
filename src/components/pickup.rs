// src/components/pickup.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::CardLocation;

/// 持ち上げ中のカードの情報だよ！🖱️➡️🃏
///
/// 場札から持ち上げた場合は、そのカードより上に積まれているカードも一緒に動く。
/// 元の山からはまだ取り除かれていない。取り除くのはドロップが成功したときだけ。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Pickup {
    /// 持ち上げたカード (グループの一番下) のコピー。
    pub card: Card,
    /// 持ち上げる前にいた場所。
    pub source: CardLocation,
}

impl Pickup {
    pub fn new(card: Card, source: CardLocation) -> Self {
        Self { card, source }
    }
}

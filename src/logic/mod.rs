// src/logic/mod.rs
//! 盤面を書き換えない純粋なロジック (デッキ生成・ルール判定・自動移動の探索)。

pub mod auto_move;
pub mod deck;
pub mod rules;

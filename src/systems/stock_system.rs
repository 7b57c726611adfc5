// src/systems/stock_system.rs
//! 山札 (Stock) をクリックしたときの処理。捨て札 (Waste) へ配る or 捨て札を山札に戻す。

use log::info;

use crate::board::Board;
use crate::components::card::Card;
use crate::logic::rules::stock_waste;

/// 山札から最大 `count` 枚を捨て札に配る。山札が空なら捨て札を全部山札に戻す。
///
/// 配るときは山札の上 `count` 枚を順番そのままで捨て札の上に積むので、
/// 捨て札の一番上は直前の山札の一番上になる。戻すときは捨て札を逆順にして
/// 山札にする。何も起きなかったら false。
pub fn draw_stock(board: &mut Board, count: usize) -> bool {
    if stock_waste::can_deal_from_stock(board.stock.is_empty()) {
        deal_from_stock(board, count)
    } else {
        reset_waste_to_stock(board)
    }
}

fn deal_from_stock(board: &mut Board, count: usize) -> bool {
    let drawn = stock_waste::cards_to_draw(board.stock.len(), count);
    if drawn == 0 {
        info!("Draw count is 0, nothing to deal.");
        return false;
    }
    info!("Dealing {} card(s) from Stock to Waste...", drawn);

    let split_at = board.stock.len() - drawn;
    let dealt = board.stock.split_off(split_at);
    board
        .waste
        .extend(dealt.into_iter().map(Card::without_tableau_state));
    board.relabel_waste();

    info!(
        "  Stock: {} card(s), Waste: {} card(s).",
        board.stock.len(),
        board.waste.len()
    );
    true
}

fn reset_waste_to_stock(board: &mut Board) -> bool {
    if !stock_waste::can_reset_stock_from_waste(board.stock.is_empty(), board.waste.is_empty()) {
        info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }
    info!("Resetting {} cards from Waste to Stock.", board.waste.len());

    let mut recycled = std::mem::take(&mut board.waste);
    recycled.reverse();
    board.stock = recycled;
    board.relabel_stock();
    true
}

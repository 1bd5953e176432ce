use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_shared::stepping_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn knight_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    stepping_targets(board, from, color, &KNIGHT_OFFSETS)
}

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_shared::sliding_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    sliding_targets(board, from, color, &BISHOP_DIRECTIONS)
}

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::bishop_moves::BISHOP_DIRECTIONS;
use crate::move_generation::move_shared::sliding_targets;
use crate::move_generation::rook_moves::ROOK_DIRECTIONS;

pub fn queen_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut targets = sliding_targets(board, from, color, &ROOK_DIRECTIONS);
    targets.extend(sliding_targets(board, from, color, &BISHOP_DIRECTIONS));
    targets
}

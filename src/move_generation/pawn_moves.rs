use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};

/// Pseudo-legal pawn destinations: single push onto an empty square, double
/// push for an unmoved pawn when both squares are empty, diagonal captures
/// onto opponent pieces, and the en-passant capture onto the board's target
/// square regardless of that square's occupancy.
pub fn pawn_moves(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    let mut targets = Vec::with_capacity(4);
    let forward = piece.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            targets.push(one_step);

            if !piece.has_moved {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.piece_at(two_step).is_none() {
                        targets.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = from.offset(forward, d_col) else {
            continue;
        };
        match board.piece_at(diagonal) {
            Some(occupant) if occupant.color != piece.color => targets.push(diagonal),
            None if board.en_passant_target == Some(diagonal) => targets.push(diagonal),
            _ => {}
        }
    }

    targets
}

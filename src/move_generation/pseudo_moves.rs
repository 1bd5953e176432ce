//! Pseudo-legal move dispatch.
//!
//! One closed match over the six piece kinds. Generation never fails: an
//! empty square or an off-board probe simply yields no destinations. Check
//! safety and castling are layered on by the legality filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::move_generation::bishop_moves::bishop_moves;
use crate::move_generation::king_moves::king_moves;
use crate::move_generation::knight_moves::knight_moves;
use crate::move_generation::pawn_moves::pawn_moves;
use crate::move_generation::queen_moves::queen_moves;
use crate::move_generation::rook_moves::rook_moves;

/// Pseudo-legal destinations of the piece on `from`, ignoring self-check.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece),
        PieceKind::Knight => knight_moves(board, from, piece.color),
        PieceKind::Bishop => bishop_moves(board, from, piece.color),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color),
        PieceKind::King => king_moves(board, from, piece.color),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Position;

    #[test]
    fn empty_square_yields_no_moves() {
        let board = Board::standard_setup();
        assert!(pseudo_legal_moves(&board, Position::new(4, 4)).is_empty());
    }

    #[test]
    fn startpos_side_has_twenty_pseudo_legal_moves() {
        let board = Board::standard_setup();
        let mut count = 0;
        for col in 0..8 {
            count += pseudo_legal_moves(&board, Position::new(1, col)).len();
            count += pseudo_legal_moves(&board, Position::new(0, col)).len();
        }
        assert_eq!(count, 20);
    }
}

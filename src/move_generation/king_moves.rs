use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_shared::stepping_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Single-step king moves. Castling is derived separately because it needs
/// castling rights and square-attack information the piece does not own.
pub fn king_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    stepping_targets(board, from, color, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn corner_king_has_three_moves() {
        let mut board = Board::empty();
        let from = Position::new(0, 0);
        board.set_piece(from, Piece::new(PieceKind::King, Color::White));
        assert_eq!(king_moves(&board, from, Color::White).len(), 3);
    }

    #[test]
    fn starting_king_is_boxed_in() {
        let board = Board::standard_setup();
        assert!(king_moves(&board, Position::new(0, 4), Color::White).is_empty());
    }
}

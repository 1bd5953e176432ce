use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_shared::sliding_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    sliding_targets(board, from, color, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn rook_on_empty_board_covers_fourteen_squares() {
        let mut board = Board::empty();
        let from = Position::new(3, 3);
        board.set_piece(from, Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(rook_moves(&board, from, Color::White).len(), 14);
    }
}

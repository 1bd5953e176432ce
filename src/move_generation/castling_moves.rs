//! Castling-move derivation.
//!
//! Castling is not part of the per-piece pseudo-legal generation because it
//! needs castling rights and square-attack information. The derived
//! descriptor carries both the king's and the rook's relocation so execution
//! can perform them atomically.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legality_filter::is_square_attacked;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Compound castling descriptor. `king_to` is the square the engine treats
/// as the selectable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingMove {
    pub side: CastleSide,
    pub king_from: Position,
    pub king_to: Position,
    pub rook_from: Position,
    pub rook_to: Position,
}

/// Castling moves currently available to `color`.
///
/// Requires an unmoved king that is not in check, the side's right still
/// set, a matching unmoved rook, empty squares strictly between them, and no
/// attacked square on the king's path. The queenside rook's transit square
/// (b-file) only needs to be empty.
pub fn castling_moves(board: &Board, color: Color) -> Vec<CastlingMove> {
    let row = color.back_row();
    let king_from = Position::new(row, 4);

    let Some(king) = board.piece_at(king_from) else {
        return Vec::new();
    };
    if king.kind != PieceKind::King || king.color != color || king.has_moved {
        return Vec::new();
    }

    let enemy = color.opposite();
    if is_square_attacked(board, king_from, enemy) {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(2);

    if board.castling_rights.kingside(color)
        && rook_ready(board, color, Position::new(row, 7))
        && cols_empty(board, row, &[5, 6])
        && cols_unattacked(board, row, &[5, 6], enemy)
    {
        moves.push(CastlingMove {
            side: CastleSide::Kingside,
            king_from,
            king_to: Position::new(row, 6),
            rook_from: Position::new(row, 7),
            rook_to: Position::new(row, 5),
        });
    }

    if board.castling_rights.queenside(color)
        && rook_ready(board, color, Position::new(row, 0))
        && cols_empty(board, row, &[1, 2, 3])
        && cols_unattacked(board, row, &[2, 3], enemy)
    {
        moves.push(CastlingMove {
            side: CastleSide::Queenside,
            king_from,
            king_to: Position::new(row, 2),
            rook_from: Position::new(row, 0),
            rook_to: Position::new(row, 3),
        });
    }

    moves
}

fn rook_ready(board: &Board, color: Color, pos: Position) -> bool {
    matches!(
        board.piece_at(pos),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
    )
}

fn cols_empty(board: &Board, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| board.piece_at(Position::new(row, col)).is_none())
}

fn cols_unattacked(board: &Board, row: u8, cols: &[u8], enemy: Color) -> bool {
    cols.iter()
        .all(|&col| !is_square_attacked(board, Position::new(row, col), enemy))
}

#[cfg(test)]
mod tests {
    use super::{castling_moves, CastleSide};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Position};

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.castling_rights = CastlingRights::all();
        board.set_piece(
            Position::new(0, 4),
            Piece::new(PieceKind::King, Color::White),
        );
        board.set_piece(
            Position::new(0, 0),
            Piece::new(PieceKind::Rook, Color::White),
        );
        board.set_piece(
            Position::new(0, 7),
            Piece::new(PieceKind::Rook, Color::White),
        );
        board.set_piece(
            Position::new(7, 4),
            Piece::new(PieceKind::King, Color::Black),
        );
        board
    }

    #[test]
    fn both_sides_available_with_clear_unattacked_path() {
        let board = castling_board();
        let moves = castling_moves(&board, Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.side == CastleSide::Kingside
            && m.king_to == Position::new(0, 6)
            && m.rook_to == Position::new(0, 5)));
        assert!(moves.iter().any(|m| m.side == CastleSide::Queenside
            && m.king_to == Position::new(0, 2)
            && m.rook_to == Position::new(0, 3)));
    }

    #[test]
    fn attacked_transit_square_removes_that_side() {
        let mut board = castling_board();
        // Black rook on the f-file attacks the kingside transit square.
        board.set_piece(
            Position::new(7, 5),
            Piece::new(PieceKind::Rook, Color::Black),
        );
        let moves = castling_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].side, CastleSide::Queenside);
    }

    #[test]
    fn attacked_b_file_does_not_block_queenside() {
        let mut board = castling_board();
        board.set_piece(
            Position::new(7, 1),
            Piece::new(PieceKind::Rook, Color::Black),
        );
        let moves = castling_moves(&board, Color::White);
        assert!(moves.iter().any(|m| m.side == CastleSide::Queenside));
    }

    #[test]
    fn king_in_check_disallows_castling_entirely() {
        let mut board = castling_board();
        board.set_piece(
            Position::new(5, 4),
            Piece::new(PieceKind::Rook, Color::Black),
        );
        assert!(castling_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn moved_rook_or_cleared_right_removes_the_side() {
        let mut board = castling_board();
        let mut rook = Piece::new(PieceKind::Rook, Color::White);
        rook.has_moved = true;
        board.set_piece(Position::new(0, 7), rook);
        let moves = castling_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].side, CastleSide::Queenside);

        board.castling_rights.clear_queenside(Color::White);
        assert!(castling_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn occupied_between_square_removes_the_side() {
        let mut board = castling_board();
        board.set_piece(
            Position::new(0, 1),
            Piece::new(PieceKind::Knight, Color::White),
        );
        let moves = castling_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].side, CastleSide::Kingside);
    }
}

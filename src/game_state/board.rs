//! Arena board representation.
//!
//! The board is a flat array of 64 optional piece values indexed by
//! `row * 8 + col`, together with the en-passant target square and castling
//! rights. Cloning is a bulk copy, which keeps the clone-per-candidate
//! legality filter cheap.

use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    /// Valid only for the ply immediately following a two-square pawn
    /// advance; cleared or overwritten by every subsequent move.
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
}

impl Board {
    /// Board with no pieces and no castling rights.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Standard starting layout, White on rows 0 and 1.
    pub fn standard_setup() -> Self {
        let mut board = Self {
            squares: [None; 64],
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
        };

        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, kind) in back_row.into_iter().enumerate() {
            let col = col as u8;
            board.set_piece(Position::new(0, col), Piece::new(kind, Color::White));
            board.set_piece(Position::new(7, col), Piece::new(kind, Color::Black));
            board.set_piece(
                Position::new(1, col),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.set_piece(
                Position::new(6, col),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()].take()
    }

    /// Move the piece on `from` to `to`, marking it as moved. Returns the
    /// captured occupant of `to`, if any. A no-op when `from` is empty.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let Some(mut piece) = self.remove_piece(from) else {
            return None;
        };
        piece.has_moved = true;
        self.squares[to.index()].replace(piece)
    }

    /// All pieces of one color with their squares.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(move |(i, sq)| {
            sq.filter(|piece| piece.color == color)
                .map(|piece| (Position::from_index(i), piece))
        })
    }

    /// Square of this color's king, `None` on malformed synthetic boards.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn standard_setup_places_thirty_two_pieces() {
        let board = Board::standard_setup();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(board.king_position(Color::White), Some(Position::new(0, 4)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(7, 4)));
        assert!(board.en_passant_target.is_none());
        assert!(board.castling_rights.kingside(Color::White));
    }

    #[test]
    fn relocate_returns_captured_piece_and_marks_mover() {
        let mut board = Board::empty();
        let from = Position::new(0, 0);
        let to = Position::new(0, 7);
        board.set_piece(from, Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(to, Piece::new(PieceKind::Knight, Color::Black));

        let captured = board.relocate(from, to);
        assert_eq!(captured.map(|p| p.kind), Some(PieceKind::Knight));
        assert!(board.piece_at(from).is_none());

        let mover = board.piece_at(to).unwrap();
        assert_eq!(mover.kind, PieceKind::Rook);
        assert!(mover.has_moved);
    }

    #[test]
    fn relocate_from_empty_square_is_a_no_op() {
        let mut board = Board::empty();
        assert!(board
            .relocate(Position::new(3, 3), Position::new(4, 4))
            .is_none());
        assert!(board.piece_at(Position::new(4, 4)).is_none());
    }

    #[test]
    fn board_clone_is_independent() {
        let mut board = Board::standard_setup();
        let clone = board.clone();
        board.remove_piece(Position::new(1, 4));
        assert!(clone.piece_at(Position::new(1, 4)).is_some());
    }
}

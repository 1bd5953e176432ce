//! Static evaluation: piece values, piece-square tables, and move heuristics.
//!
//! Search stays shallow by design, so all strength differences between the
//! AI tiers come from the terms in this module. Tables are written visually
//! with rank 8 on the first line and are mirrored for Black by row-flipping.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Standard point values in centipawns. The king's value only matters as a
/// capture deterrent; it never leaves the board in legal play.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// The four central squares d4, e4, d5, e5.
pub const CENTER_SQUARES: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

/// Flat bonus for landing on a central square.
pub const CENTER_BONUS: i32 = 10;

/// Flat bonus for moving a not-yet-moved non-pawn piece early.
pub const DEVELOPMENT_BONUS: i32 = 10;

/// The development bonus applies during the first 10 plies only.
pub const DEVELOPMENT_PLY_LIMIT: usize = 10;

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Positional bonus for a piece of `color` standing on `pos`. Rooks and
/// queens carry no table and score 0.
pub fn piece_square_bonus(kind: PieceKind, color: Color, pos: Position) -> i32 {
    let table: &[i32; 64] = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::King => &KING_TABLE,
        PieceKind::Rook | PieceKind::Queen => return 0,
    };

    let row = match color {
        Color::White => pos.row,
        Color::Black => 7 - pos.row,
    };
    // Tables are laid out visually, so rank 8 occupies the first array row.
    table[(7 - row) as usize * 8 + pos.col as usize]
}

/// The single static heuristic shared by the Medium and Hard tiers:
/// captured-piece value, destination table bonus, center bonus, and an early
/// development bonus for unmoved non-pawns.
pub fn move_score(board: &Board, from: Position, to: Position, plies_played: usize) -> i32 {
    let Some(piece) = board.piece_at(from) else {
        return 0;
    };

    let mut score = 0;

    let en_passant_capture = piece.kind == PieceKind::Pawn
        && board.en_passant_target == Some(to)
        && from.col != to.col
        && board.piece_at(to).is_none();
    if en_passant_capture {
        score += piece_value(PieceKind::Pawn);
    } else if let Some(victim) = board.piece_at(to) {
        score += piece_value(victim.kind);
    }

    score += piece_square_bonus(piece.kind, piece.color, to);

    if CENTER_SQUARES.contains(&to) {
        score += CENTER_BONUS;
    }

    if !piece.has_moved && piece.kind != PieceKind::Pawn && plies_played < DEVELOPMENT_PLY_LIMIT {
        score += DEVELOPMENT_BONUS;
    }

    score
}

/// Whole-board material-plus-position balance from `perspective`'s side.
/// Positive favors `perspective`.
pub fn board_differential(board: &Board, perspective: Color) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let sign = if color == perspective { 1 } else { -1 };
        for (pos, piece) in board.pieces_of(color) {
            score += sign * (piece_value(piece.kind) + piece_square_bonus(piece.kind, color, pos));
        }
    }
    score
}

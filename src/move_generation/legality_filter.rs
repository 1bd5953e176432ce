//! Legal move filtering and attack queries.
//!
//! Orchestrates the clone-apply-test pipeline: every pseudo-legal candidate
//! is applied to a cloned board and rejected when it leaves the mover's king
//! attacked. The same square-attack predicate feeds castling derivation and
//! status detection. This is the dominant cost center of the engine; the
//! arena board keeps each clone a bulk copy.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::move_generation::bishop_moves::BISHOP_DIRECTIONS;
use crate::move_generation::castling_moves::castling_moves;
use crate::move_generation::king_moves::KING_OFFSETS;
use crate::move_generation::knight_moves::KNIGHT_OFFSETS;
use crate::move_generation::move_shared::sliding_targets;
use crate::move_generation::pseudo_moves::pseudo_legal_moves;
use crate::move_generation::rook_moves::ROOK_DIRECTIONS;

/// A piece's square together with its filtered legal destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub from: Position,
    pub destinations: Vec<Position>,
}

/// Whether any piece of `attacker` attacks `target`.
///
/// Attack patterns, not move patterns: pawn diagonals count regardless of
/// the target square's occupancy, so the predicate also serves empty castling
/// transit squares.
pub fn is_square_attacked(board: &Board, target: Position, attacker: Color) -> bool {
    for (from, piece) in board.pieces_of(attacker) {
        let attacks = match piece.kind {
            PieceKind::Pawn => {
                let forward = attacker.forward();
                [-1, 1]
                    .into_iter()
                    .any(|d_col| from.offset(forward, d_col) == Some(target))
            }
            PieceKind::Knight => KNIGHT_OFFSETS
                .into_iter()
                .any(|(d_row, d_col)| from.offset(d_row, d_col) == Some(target)),
            PieceKind::King => KING_OFFSETS
                .into_iter()
                .any(|(d_row, d_col)| from.offset(d_row, d_col) == Some(target)),
            PieceKind::Bishop => {
                sliding_targets(board, from, attacker, &BISHOP_DIRECTIONS).contains(&target)
            }
            PieceKind::Rook => {
                sliding_targets(board, from, attacker, &ROOK_DIRECTIONS).contains(&target)
            }
            PieceKind::Queen => {
                sliding_targets(board, from, attacker, &ROOK_DIRECTIONS).contains(&target)
                    || sliding_targets(board, from, attacker, &BISHOP_DIRECTIONS).contains(&target)
            }
        };
        if attacks {
            return true;
        }
    }
    false
}

/// Whether this color's king is attacked. A board with no king of `color`
/// reports "not in check" (reachable only through synthetic positions).
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Apply a move to the board in place, including en-passant pawn removal and
/// the castling rook co-move. Returns the captured piece, if any. The caller
/// is responsible for having validated the move; an empty `from` is a no-op.
pub fn apply_move_to(board: &mut Board, from: Position, to: Position) -> Option<Piece> {
    let Some(piece) = board.piece_at(from) else {
        return None;
    };
    let color = piece.color;

    // En-passant removes the pawn one row behind the destination, not the
    // piece on the destination.
    let mut en_passant_victim = None;
    if piece.kind == PieceKind::Pawn
        && board.en_passant_target == Some(to)
        && from.col != to.col
        && board.piece_at(to).is_none()
    {
        if let Some(victim_sq) = to.offset(-color.forward(), 0) {
            en_passant_victim = board.remove_piece(victim_sq);
        }
    }

    // Castling relocates the rook in the same ply.
    if piece.kind == PieceKind::King && (to.col as i8 - from.col as i8).abs() == 2 {
        let row = from.row;
        if to.col == 6 {
            board.relocate(Position::new(row, 7), Position::new(row, 5));
        } else {
            board.relocate(Position::new(row, 0), Position::new(row, 3));
        }
    }

    let captured = board.relocate(from, to).or(en_passant_victim);

    update_castling_rights(board, color, piece.kind, from, to);

    board.en_passant_target = if piece.kind == PieceKind::Pawn
        && (to.row as i8 - from.row as i8).abs() == 2
    {
        Some(Position::new((from.row + to.row) / 2, from.col))
    } else {
        None
    };

    captured
}

/// The same transform on an independent clone, for simulation.
pub fn apply_candidate(board: &Board, from: Position, to: Position) -> Board {
    let mut clone = board.clone();
    apply_move_to(&mut clone, from, to);
    clone
}

fn update_castling_rights(
    board: &mut Board,
    color: Color,
    moved: PieceKind,
    from: Position,
    to: Position,
) {
    if moved == PieceKind::King {
        board.castling_rights.clear_both(color);
    }

    if moved == PieceKind::Rook && from.row == color.back_row() {
        if from.col == 0 {
            board.castling_rights.clear_queenside(color);
        } else if from.col == 7 {
            board.castling_rights.clear_kingside(color);
        }
    }

    // Capturing a rook on its home corner clears the opponent's right.
    let enemy = color.opposite();
    if to.row == enemy.back_row() {
        if to.col == 0 {
            board.castling_rights.clear_queenside(enemy);
        } else if to.col == 7 {
            board.castling_rights.clear_kingside(enemy);
        }
    }
}

/// Legal destinations for the piece on `from`: pseudo-legal moves plus
/// castling, minus everything that leaves the mover's own king attacked.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut candidates = pseudo_legal_moves(board, from);
    if piece.kind == PieceKind::King {
        candidates.extend(
            castling_moves(board, piece.color)
                .into_iter()
                .filter(|castle| castle.king_from == from)
                .map(|castle| castle.king_to),
        );
    }

    candidates.retain(|&to| {
        let simulated = apply_candidate(board, from, to);
        !is_king_in_check(&simulated, piece.color)
    });
    candidates
}

/// Whether `color` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}

/// Every piece of `color` with a non-empty legal destination list.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<PieceMoves> {
    board
        .pieces_of(color)
        .filter_map(|(from, _)| {
            let destinations = legal_destinations(board, from);
            if destinations.is_empty() {
                None
            } else {
                Some(PieceMoves { from, destinations })
            }
        })
        .collect()
}

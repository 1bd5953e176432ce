//! Errors used throughout the chess engine.
//!
//! A single crate-wide error type covers every recoverable failure mode the
//! core can report. All of these are usage errors: the engine returns them
//! without mutating game state and never panics on them.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Position};

/// Unified error type for the chess engine.
///
/// Variants carry contextual payloads where useful so callers can present
/// precise diagnostics. The presentation layer is expected to surface the
/// `Display` text to the user; none of these variants are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A move was requested while no piece is selected.
    #[error("no piece selected")]
    NoPieceSelected,

    /// The requested destination is not among the selected piece's legal
    /// moves.
    #[error("invalid move: {to} is not a legal destination")]
    InvalidDestination { to: Position },

    /// `promote_pawn` was called while no promotion is pending.
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// A pawn may only promote to a queen, rook, bishop, or knight.
    #[error("{kind} is not a valid promotion piece")]
    InvalidPromotionPiece { kind: PieceKind },

    /// The game has already reached a terminal state.
    #[error("the game is already over")]
    GameOver,

    /// An algebraic coordinate string failed to parse.
    #[error("invalid square coordinate: {0}")]
    InvalidCoordinate(String),
}

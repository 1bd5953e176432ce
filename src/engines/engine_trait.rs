//! Engine abstraction layer for the tiered AI.
//!
//! Defines the common move payload and trait interface so the difficulty
//! tiers can be selected at runtime behind a single entry point.

use crate::game_state::chess_types::Position;
use crate::game_state::game_engine::GameEngine;

/// AI strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A from/to pair the caller feeds back through the interactive protocol
/// exactly like a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Position,
    pub to: Position,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for the side to move. `None` means no legal move exists,
    /// signaling game over to the caller; a move is never rejected.
    fn choose_move(&mut self, game: &GameEngine) -> Option<ChosenMove>;
}

/// Flatten the engine's per-piece legal move lists into candidate pairs.
pub fn candidate_moves(game: &GameEngine) -> Vec<ChosenMove> {
    game.all_valid_moves()
        .into_iter()
        .flat_map(|piece_moves| {
            let from = piece_moves.from;
            piece_moves
                .destinations
                .into_iter()
                .map(move |to| ChosenMove { from, to })
        })
        .collect()
}

//! Easy-tier random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for low-strength
//! gameplay and integration testing.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};
use crate::game_state::game_engine::GameEngine;

pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "parlor random"
    }

    fn choose_move(&mut self, game: &GameEngine) -> Option<ChosenMove> {
        let candidates = candidate_moves(game);
        let mut rng = rand::rng();
        candidates.as_slice().choose(&mut rng).copied()
    }
}

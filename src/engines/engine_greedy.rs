//! Medium-tier greedy engine.
//!
//! Scores every legal move with the shared static heuristic and a bounded
//! random jitter, then takes the maximum. The jitter keeps play at this tier
//! from being deterministic and exploitable.

use rand::RngExt;

use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};
use crate::game_state::game_engine::GameEngine;
use crate::search::board_scoring::move_score;

/// Exclusive upper bound of the per-move random jitter.
const JITTER: i32 = 10;

pub struct GreedyEngine;

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "parlor greedy"
    }

    fn choose_move(&mut self, game: &GameEngine) -> Option<ChosenMove> {
        let candidates = candidate_moves(game);
        let plies_played = game.move_history().len();
        let mut rng = rand::rng();

        let mut best: Option<(i32, ChosenMove)> = None;
        for candidate in candidates {
            let mut score = move_score(game.board(), candidate.from, candidate.to, plies_played);
            score += rng.random_range(0..JITTER);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

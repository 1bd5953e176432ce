//! Difficulty-keyed AI facade.
//!
//! An `AiPlayer` is constructed for one color and dispatches to the tier
//! engines. The chosen move is fed back into the game engine through the
//! same select/move protocol a human uses.

use log::debug;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_lookahead::LookaheadEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{ChosenMove, Difficulty, Engine};
use crate::game_state::chess_types::Color;
use crate::game_state::game_engine::GameEngine;

#[derive(Debug, Clone, Copy)]
pub struct AiPlayer {
    color: Color,
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self { color, difficulty }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Pick a move for this player. `None` when the game is over, when it is
    /// not this color's turn, or when no legal move exists.
    pub fn best_move(&self, game: &GameEngine) -> Option<ChosenMove> {
        if game.is_game_over() || game.current_player() != self.color {
            return None;
        }

        let chosen = match self.difficulty {
            Difficulty::Easy => RandomEngine.choose_move(game),
            Difficulty::Medium => GreedyEngine.choose_move(game),
            Difficulty::Hard => LookaheadEngine.choose_move(game),
        };

        if let Some(mv) = chosen {
            debug!(
                "{} ({:?}) picked {} to {}",
                self.color, self.difficulty, mv.from, mv.to
            );
        }
        chosen
    }
}

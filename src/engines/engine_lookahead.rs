//! Hard-tier engine with a one-ply static lookahead.
//!
//! Extends the shared move heuristic with the whole-board differential of
//! the position after the move and a bonus for leaving the opponent in
//! check. No randomness: ties resolve to the first candidate, so play at
//! this tier is deterministic.

use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};
use crate::game_state::game_engine::GameEngine;
use crate::move_generation::legality_filter::{apply_candidate, is_king_in_check};
use crate::search::board_scoring::{board_differential, move_score};

/// Divisor applied to the post-move board differential.
const DIFFERENTIAL_WEIGHT: i32 = 2;

/// Bonus for a move that puts the opponent in check.
const CHECK_BONUS: i32 = 50;

pub struct LookaheadEngine;

impl Engine for LookaheadEngine {
    fn name(&self) -> &str {
        "parlor lookahead"
    }

    fn choose_move(&mut self, game: &GameEngine) -> Option<ChosenMove> {
        let candidates = candidate_moves(game);
        let plies_played = game.move_history().len();
        let mover = game.current_player();

        let mut best: Option<(i32, ChosenMove)> = None;
        for candidate in candidates {
            let mut score = move_score(game.board(), candidate.from, candidate.to, plies_played);

            let next = apply_candidate(game.board(), candidate.from, candidate.to);
            score += board_differential(&next, mover) / DIFFERENTIAL_WEIGHT;
            if is_king_in_check(&next, mover.opposite()) {
                score += CHECK_BONUS;
            }

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::LookaheadEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Position};
    use crate::game_state::game_engine::GameEngine;
    use crate::game_state::game_snapshot::{CapturedPieces, GameSnapshot};
    use crate::move_generation::legality_filter::{apply_candidate, is_king_in_check};

    fn engine_with_board(board: Board, to_move: Color) -> GameEngine {
        let mut game = GameEngine::new();
        game.restore_from_snapshot(&GameSnapshot {
            status: GameStatus::InProgress,
            current_player: to_move,
            board,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        });
        game
    }

    #[test]
    fn lookahead_prefers_the_bigger_capture() {
        let mut board = Board::empty();
        board.set_piece(
            Position::new(0, 4),
            Piece::new(PieceKind::King, Color::White),
        );
        board.set_piece(
            Position::new(3, 3),
            Piece::new(PieceKind::Queen, Color::White),
        );
        // An undefended rook and an undefended pawn both in reach.
        board.set_piece(
            Position::new(3, 7),
            Piece::new(PieceKind::Rook, Color::Black),
        );
        board.set_piece(
            Position::new(4, 3),
            Piece::new(PieceKind::Pawn, Color::Black),
        );
        board.set_piece(
            Position::new(7, 0),
            Piece::new(PieceKind::King, Color::Black),
        );

        let game = engine_with_board(board, Color::White);
        let chosen = LookaheadEngine
            .choose_move(&game)
            .expect("the position has legal moves");
        assert_eq!(chosen.to, Position::new(3, 7));
    }

    #[test]
    fn lookahead_is_deterministic() {
        let game = GameEngine::new();
        let first = LookaheadEngine.choose_move(&game);
        for _ in 0..5 {
            assert_eq!(LookaheadEngine.choose_move(&game), first);
        }
    }

    #[test]
    fn checking_moves_get_a_bonus() {
        // Lone rook versus lone king: material is constant, so the check
        // bonus decides.
        let mut board = Board::empty();
        board.set_piece(
            Position::new(0, 4),
            Piece::new(PieceKind::King, Color::White),
        );
        board.set_piece(
            Position::new(3, 0),
            Piece::new(PieceKind::Rook, Color::White),
        );
        board.set_piece(
            Position::new(7, 7),
            Piece::new(PieceKind::King, Color::Black),
        );

        let game = engine_with_board(board, Color::White);
        let chosen = LookaheadEngine
            .choose_move(&game)
            .expect("the position has legal moves");
        let next = apply_candidate(game.board(), chosen.from, chosen.to);
        assert!(is_king_in_check(&next, Color::Black));
    }

    #[test]
    fn lookahead_returns_none_without_legal_moves() {
        let mut game = GameEngine::new();
        game.declare_draw().expect("drawing a fresh game succeeds");
        assert!(LookaheadEngine.choose_move(&game).is_none());
    }
}

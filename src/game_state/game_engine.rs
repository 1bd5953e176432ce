//! Interactive game engine: the move-execution state machine.
//!
//! Owns the live board and drives the select / move / promote protocol.
//! Every finalized ply switches the turn, rederives the game status for the
//! new side to move, and appends a deep-copy snapshot to the history
//! manager. Failed operations leave the engine in its last valid state.

use log::debug;

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    Color, GameStatus, Move, MoveKind, Piece, PieceKind, Position,
};
use crate::game_state::game_snapshot::{CapturedPieces, GameSnapshot};
use crate::history::history_manager::{HistoryEntry, HistoryManager};
use crate::move_generation::legality_filter::{
    all_legal_moves, apply_move_to, has_any_legal_move, is_king_in_check, legal_destinations,
    PieceMoves,
};
use crate::utils::notation::move_label;

/// Result of a successful `make_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The ply is finished and the turn has passed.
    Completed(Move),
    /// A pawn reached the far rank; the turn is held open until
    /// `promote_pawn` names the replacement piece.
    PromotionPending(Position),
}

#[derive(Debug, Clone)]
struct Selection {
    from: Position,
    destinations: Vec<Position>,
}

#[derive(Debug, Clone, Copy)]
struct PendingPromotion {
    from: Position,
    to: Position,
    captured: Option<PieceKind>,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Color,
    status: GameStatus,
    move_history: Vec<Move>,
    captured_pieces: CapturedPieces,
    selection: Option<Selection>,
    pending_promotion: Option<PendingPromotion>,
    winner: Option<Color>,
    history: HistoryManager,
}

impl GameEngine {
    /// Fresh game with the standard layout, White to move.
    pub fn new() -> Self {
        let mut engine = Self {
            board: Board::standard_setup(),
            current_player: Color::White,
            status: GameStatus::InProgress,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            selection: None,
            pending_promotion: None,
            winner: None,
            history: HistoryManager::new(),
        };
        let initial = engine.snapshot();
        engine.history.add_entry(None, initial, "start".to_owned());
        engine
    }

    /// Discard the current game and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // --- Interactive move protocol ---

    /// Select the piece on `pos` and return its legal destinations.
    ///
    /// Selecting an empty square, an opponent piece, or anything while the
    /// game is over or a promotion is pending clears the selection and
    /// returns no moves.
    pub fn select_piece(&mut self, pos: Position) -> Vec<Position> {
        if self.status.is_terminal() || self.pending_promotion.is_some() {
            self.selection = None;
            return Vec::new();
        }

        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.current_player => {
                let destinations = legal_destinations(&self.board, pos);
                self.selection = Some(Selection {
                    from: pos,
                    destinations: destinations.clone(),
                });
                destinations
            }
            _ => {
                self.selection = None;
                Vec::new()
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Move the selected piece to `to`.
    ///
    /// Fails with `NoPieceSelected` or `InvalidDestination` without touching
    /// the game state. A pawn reaching the far rank returns
    /// `PromotionPending` and holds the turn open.
    pub fn make_move(&mut self, to: Position) -> Result<MoveOutcome, ChessError> {
        let Some(selection) = &self.selection else {
            return Err(ChessError::NoPieceSelected);
        };
        if !selection.destinations.contains(&to) {
            return Err(ChessError::InvalidDestination { to });
        }
        let from = selection.from;
        let Some(piece) = self.board.piece_at(from) else {
            return Err(ChessError::NoPieceSelected);
        };

        let kind = classify_move(&self.board, piece, from, to);
        let captured = apply_move_to(&mut self.board, from, to).map(|victim| victim.kind);
        if let Some(victim) = captured {
            self.captured_pieces
                .record(self.current_player.opposite(), victim);
        }
        self.selection = None;

        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            self.pending_promotion = Some(PendingPromotion { from, to, captured });
            return Ok(MoveOutcome::PromotionPending(to));
        }

        let mv = Move {
            from,
            to,
            kind,
            captured,
            promotion: None,
        };
        self.finalize_turn(mv, piece.kind);
        Ok(MoveOutcome::Completed(mv))
    }

    /// Replace the pending pawn with the requested piece and finish the ply.
    pub fn promote_pawn(&mut self, kind: PieceKind) -> Result<Move, ChessError> {
        let Some(pending) = self.pending_promotion else {
            return Err(ChessError::NoPendingPromotion);
        };
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessError::InvalidPromotionPiece { kind });
        }

        let mut replacement = Piece::new(kind, self.current_player);
        replacement.has_moved = true;
        self.board.set_piece(pending.to, replacement);
        self.pending_promotion = None;

        let mv = Move {
            from: pending.from,
            to: pending.to,
            kind: MoveKind::Promotion,
            captured: pending.captured,
            promotion: Some(kind),
        };
        self.finalize_turn(mv, PieceKind::Pawn);
        Ok(mv)
    }

    /// The current player concedes. The opponent wins.
    pub fn resign(&mut self) -> Result<(), ChessError> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        self.status = GameStatus::Resigned;
        self.winner = Some(self.current_player.opposite());
        self.selection = None;
        self.pending_promotion = None;
        Ok(())
    }

    /// Record an agreed draw.
    pub fn declare_draw(&mut self) -> Result<(), ChessError> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        self.status = GameStatus::Draw;
        self.winner = None;
        self.selection = None;
        self.pending_promotion = None;
        Ok(())
    }

    fn finalize_turn(&mut self, mv: Move, moved: PieceKind) {
        self.move_history.push(mv);

        let next = self.current_player.opposite();
        let attacked = is_king_in_check(&self.board, next);
        let any_moves = has_any_legal_move(&self.board, next);
        self.status = match (any_moves, attacked) {
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::InProgress,
        };
        self.current_player = next;
        self.winner = match self.status {
            GameStatus::Checkmate => Some(next.opposite()),
            _ => None,
        };

        let notation = move_label(
            &mv,
            moved,
            self.status == GameStatus::Check,
            self.status == GameStatus::Checkmate,
        );
        debug!(
            "ply {} finalized as {notation}, status {:?}",
            self.move_history.len(),
            self.status
        );

        let snapshot = self.snapshot();
        self.history.add_entry(Some(mv), snapshot, notation);
    }

    // --- Query surface ---

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only piece snapshot for rendering.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.piece_at(pos)
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured_pieces
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Position> {
        self.selection.as_ref().map(|s| s.from)
    }

    #[inline]
    pub fn pending_promotion_square(&self) -> Option<Position> {
        self.pending_promotion.map(|p| p.to)
    }

    /// Square of the king currently in check, for highlighting.
    pub fn king_in_check_position(&self) -> Option<Position> {
        match self.status {
            GameStatus::Check | GameStatus::Checkmate => {
                self.board.king_position(self.current_player)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Every legal move of the current player, the AI search entry point.
    pub fn all_valid_moves(&self) -> Vec<PieceMoves> {
        if self.status.is_terminal() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        all_legal_moves(&self.board, self.current_player)
    }

    /// Deep, independent copy of the full game state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            current_player: self.current_player,
            board: self.board.clone(),
            move_history: self.move_history.clone(),
            captured_pieces: self.captured_pieces.clone(),
        }
    }

    /// Replace the live state with a snapshot's contents.
    pub fn restore_from_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.board = snapshot.board.clone();
        self.current_player = snapshot.current_player;
        self.status = snapshot.status;
        self.move_history = snapshot.move_history.clone();
        self.captured_pieces = snapshot.captured_pieces.clone();
        self.selection = None;
        self.pending_promotion = None;
        self.winner = match self.status {
            GameStatus::Checkmate => Some(self.current_player.opposite()),
            _ => None,
        };
    }

    // --- History surface ---

    pub fn undo_move(&mut self) -> bool {
        match self.history.go_back() {
            Some(snapshot) => {
                self.restore_from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo_move(&mut self) -> bool {
        match self.history.go_forward() {
            Some(snapshot) => {
                self.restore_from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn go_to_start(&mut self) -> bool {
        match self.history.go_to_start() {
            Some(snapshot) => {
                self.restore_from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn go_to_latest(&mut self) -> bool {
        match self.history.go_to_latest() {
            Some(snapshot) => {
                self.restore_from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn go_to_history_point(&mut self, index: usize) -> bool {
        match self.history.go_to_entry(index) {
            Some(snapshot) => {
                self.restore_from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_go_back()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Ordered history entries with per-entry notation, for the move list.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_move(board: &Board, piece: Piece, from: Position, to: Position) -> MoveKind {
    if piece.kind == PieceKind::King && (to.col as i8 - from.col as i8).abs() == 2 {
        if to.col == 6 {
            return MoveKind::CastleKingside;
        }
        return MoveKind::CastleQueenside;
    }
    if piece.kind == PieceKind::Pawn
        && board.en_passant_target == Some(to)
        && from.col != to.col
        && board.piece_at(to).is_none()
    {
        return MoveKind::EnPassant;
    }
    if board.piece_at(to).is_some() {
        return MoveKind::Capture;
    }
    MoveKind::Normal
}

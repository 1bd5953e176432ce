//! Algebraic-style move labels for the history move list.
//!
//! Produces standard-looking notation: piece letter, "x" on captures with
//! the origin file for pawns, destination square, "=Q" for promotions, and
//! "+"/"#" suffixes. Castling renders as "O-O"/"O-O-O". This is a labeling
//! format only; PGN interchange is out of scope.

use crate::game_state::chess_types::{Move, MoveKind, PieceKind};

/// Render the label for a finalized ply. `moved` is the kind of the piece
/// that moved (a pawn for promotions).
pub fn move_label(mv: &Move, moved: PieceKind, gives_check: bool, is_checkmate: bool) -> String {
    let mut label = match mv.kind {
        MoveKind::CastleKingside => "O-O".to_owned(),
        MoveKind::CastleQueenside => "O-O-O".to_owned(),
        _ => {
            let mut body = String::new();
            let is_capture = mv.captured.is_some();

            match moved.letter() {
                Some(letter) => {
                    body.push(letter);
                }
                None if is_capture => {
                    // Pawn captures name the origin file.
                    body.push(char::from(b'a' + mv.from.col));
                }
                None => {}
            }

            if is_capture {
                body.push('x');
            }
            body.push_str(&mv.to.to_string());

            if let Some(promotion) = mv.promotion.and_then(PieceKind::letter) {
                body.push('=');
                body.push(promotion);
            }
            body
        }
    };

    if is_checkmate {
        label.push('#');
    } else if gives_check {
        label.push('+');
    }
    label
}

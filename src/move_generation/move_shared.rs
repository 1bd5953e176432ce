//! Shared movement primitives.
//!
//! Stepping pieces (king, knight) probe a fixed offset list; sliding pieces
//! (rook, bishop, queen) walk rays until blocked. Both ignore check safety,
//! which is the legality filter's job.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// Destinations reachable by a fixed offset list. On-board squares that are
/// empty or hold an opponent piece.
pub fn stepping_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Position> {
    let mut targets = Vec::with_capacity(offsets.len());
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color == color => {}
            _ => targets.push(to),
        }
    }
    targets
}

/// Destinations reachable along rays. Each direction is walked until the
/// board edge, a same-color piece (excluded), or an opponent piece (included
/// as a capture).
pub fn sliding_targets(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let mut targets = Vec::new();
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => {
                    targets.push(to);
                    current = to;
                }
                Some(occupant) => {
                    if occupant.color != color {
                        targets.push(to);
                    }
                    break;
                }
            }
        }
    }
    targets
}

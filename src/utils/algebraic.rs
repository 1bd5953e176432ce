//! Algebraic coordinate parsing.
//!
//! Converts human-readable coordinates (for example `e4`) into board
//! positions. The reverse direction is `Position`'s `Display` impl.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Position;

/// Parse a coordinate such as "e4" into a `Position`.
pub fn coord_to_position(coord: &str) -> Result<Position, ChessError> {
    let bytes = coord.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(coord.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidCoordinate(coord.to_owned()));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(coord.to_owned()));
    }

    Ok(Position::new(rank - b'1', file - b'a'))
}

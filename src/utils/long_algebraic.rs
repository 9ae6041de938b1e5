//! Move notation used by the console game.
//!
//! A move token names the origin and destination squares, optionally
//! separated by `-`, `x`, `:` or a space, and optionally prefixed with a
//! piece letter: `e2e4`, `e2-e4`, `e2 e4`, `Pe2-e4`, `Ng1f3`, `Bc1xh6`.
//! A piece letter is a claim about the origin square that the game session
//! checks before accepting the move.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNotation {
    pub mv: Move,
    pub piece: Option<PieceKind>,
}

pub fn parse_move_notation(token: &str) -> ChessResult<MoveNotation> {
    let invalid = || ChessErrors::InvalidAlgebraicString(token.to_owned());

    let compact: String = token
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | 'x' | ':' | ' '))
        .collect();
    if !compact.is_ascii() {
        return Err(invalid());
    }

    let (piece, squares) = match compact.len() {
        4 => (None, compact.as_str()),
        5 => {
            let letter = compact.chars().next().ok_or_else(invalid)?;
            (Some(PieceKind::from_letter(letter).ok_or_else(invalid)?), &compact[1..])
        }
        _ => return Err(invalid()),
    };

    let from = algebraic_to_coord(&squares[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_coord(&squares[2..4]).map_err(|_| invalid())?;

    Ok(MoveNotation {
        mv: Move::new(from, to),
        piece,
    })
}

/// Format a move as origin and destination squares, e.g. `e2e4`.
pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        coord_to_algebraic(mv.from)?,
        coord_to_algebraic(mv.to)?
    ))
}

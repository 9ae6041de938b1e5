//! Check detection.
//!
//! Move generation never lists a king as a capture target, so asking "does
//! any enemy move land on the king" would always answer no. The oracle
//! therefore swaps the king for a same-color pawn for the duration of the
//! query (`KingDisguise`), collects every opposing destination, and puts the
//! king back when the guard drops, on every exit path.

use std::ops::Deref;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::pseudo_legal_destinations;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> ChessResult<Coord> {
    Coord::all()
        .find(|&coord| game_state.piece_at(coord) == Some(Piece::new(PieceKind::King, color)))
        .ok_or(ChessErrors::MissingKing(color))
}

/// Scoped replacement of a king by a same-color pawn placeholder.
struct KingDisguise<'a> {
    game_state: &'a mut GameState,
    square: Coord,
    king: Piece,
}

impl<'a> KingDisguise<'a> {
    fn new(game_state: &'a mut GameState, color: Color) -> ChessResult<Self> {
        let square = king_square(game_state, color)?;
        let king = Piece::new(PieceKind::King, color);
        game_state.set_piece(square, Some(Piece::new(PieceKind::Pawn, color)));
        Ok(Self {
            game_state,
            square,
            king,
        })
    }
}

impl Deref for KingDisguise<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl Drop for KingDisguise<'_> {
    fn drop(&mut self) {
        self.game_state.set_piece(self.square, Some(self.king));
    }
}

/// True when any piece of `attacker_color` has a pseudo-legal move to
/// `square`. Kings standing on `square` are invisible to this query; use
/// `is_king_in_check` for kings.
pub fn is_square_attacked(game_state: &GameState, square: Coord, attacker_color: Color) -> bool {
    game_state
        .pieces_of(attacker_color)
        .into_iter()
        .any(|(from, _)| pseudo_legal_destinations(game_state, from).contains(&square))
}

/// Whether `color`'s king is attacked by the other side.
///
/// Takes the board mutably for the disguise; on return the board is
/// unchanged. A board without a `color` king is an invariant violation.
pub fn is_king_in_check(game_state: &mut GameState, color: Color) -> ChessResult<bool> {
    let disguised = KingDisguise::new(game_state, color)?;
    let attacked = is_square_attacked(&disguised, disguised.square, color.opposite());
    Ok(attacked)
}

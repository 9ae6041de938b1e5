//! Pseudo-legal destination generation and the legal move generator trait.
//!
//! `pseudo_legal_destinations` dispatches on the movement family of the
//! piece on a square (leaper, slider, pawn) and applies the shared
//! post-filter. It knows nothing about checks; `MoveGenerator`
//! implementations layer legality on top.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{own_piece_on, retain_reachable};
use crate::moves::leaper_moves::{leaper_targets, Offset, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::moves::pawn_moves::{pawn_captures, pawn_pushes};
use crate::moves::slider_moves::{
    trace_ray, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Destinations of the piece on `from` with respect to movement rules and
/// occupancy only. Empty when `from` is empty.
pub fn pseudo_legal_destinations(game_state: &GameState, from: Coord) -> Vec<Coord> {
    let Some(piece) = game_state.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Knight => out.extend(leaper_targets(from, &KNIGHT_OFFSETS)),
        PieceKind::King => out.extend(leaper_targets(from, &KING_OFFSETS)),
        PieceKind::Bishop => trace_rays(game_state, from, piece.color, &BISHOP_DIRECTIONS, &mut out),
        PieceKind::Rook => trace_rays(game_state, from, piece.color, &ROOK_DIRECTIONS, &mut out),
        PieceKind::Queen => trace_rays(game_state, from, piece.color, &QUEEN_DIRECTIONS, &mut out),
        PieceKind::Pawn => {
            pawn_pushes(game_state, from, piece.color, &mut out);
            pawn_captures(game_state, from, piece.color, &mut out);
        }
    }

    retain_reachable(game_state, piece.color, &mut out);
    out
}

fn trace_rays(
    game_state: &GameState,
    from: Coord,
    mover: Color,
    directions: &[Offset],
    out: &mut Vec<Coord>,
) {
    for &direction in directions {
        trace_ray(game_state, from, direction, mover, out);
    }
}

/// Legal move generation over a mutable board.
///
/// Implementations may apply and undo moves while they work but must leave
/// the board exactly as they found it.
pub trait MoveGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Legal destinations of the piece on `from`, whichever color it is.
    fn legal_destinations(&self, game_state: &mut GameState, from: Coord)
        -> ChessResult<Vec<Coord>>;

    /// Origin holds a piece of the side to move and the destination is one
    /// of its legal destinations.
    fn is_legal_move(&self, game_state: &mut GameState, mv: Move) -> ChessResult<bool> {
        if own_piece_on(game_state, mv.from).is_none() {
            return Ok(false);
        }
        Ok(self.legal_destinations(game_state, mv.from)?.contains(&mv.to))
    }

    /// Every legal move for `color`, grouped by origin in row-major order.
    fn legal_moves(&self, game_state: &mut GameState, color: Color) -> ChessResult<Vec<Move>> {
        let mut moves = Vec::new();
        for (from, _) in game_state.pieces_of(color) {
            for to in self.legal_destinations(game_state, from)? {
                moves.push(Move::new(from, to));
            }
        }
        Ok(moves)
    }

    fn has_any_legal_move(&self, game_state: &mut GameState, color: Color) -> ChessResult<bool> {
        for (from, _) in game_state.pieces_of(color) {
            if !self.legal_destinations(game_state, from)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

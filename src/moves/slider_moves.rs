//! Ray directions and ray tracing for bishops, rooks and queens.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_moves::Offset;

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Walk one ray from `from`, pushing every empty square and the first
/// occupied square if it holds a piece of the other color.
pub fn trace_ray(
    game_state: &GameState,
    from: Coord,
    direction: Offset,
    mover: Color,
    out: &mut Vec<Coord>,
) {
    let (d_row, d_col) = direction;
    let mut cursor = from.offset(d_row, d_col);

    while let Some(square) = cursor {
        match game_state.piece_at(square) {
            None => out.push(square),
            Some(blocker) => {
                if blocker.color != mover {
                    out.push(square);
                }
                break;
            }
        }
        cursor = square.offset(d_row, d_col);
    }
}

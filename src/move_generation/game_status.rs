//! Game outcome classification.
//!
//! The status is never stored; it is derived from whether the side to move
//! has a legal move and whether its king is attacked.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Side to move has at least one legal move.
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

pub fn game_status<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
) -> ChessResult<GameStatus> {
    let side = game_state.side_to_move;
    let in_check = is_king_in_check(game_state, side)?;
    let has_moves = generator.has_any_legal_move(game_state, side)?;

    Ok(match (has_moves, in_check) {
        (true, in_check) => GameStatus::Ongoing { in_check },
        (false, true) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
    })
}

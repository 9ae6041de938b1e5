//! Player abstraction used by the game session.
//!
//! A player is asked for a move whenever its side is to move. Humans at a
//! console and the random computer player sit behind the same trait so the
//! session can seat any combination of them.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::long_algebraic::MoveNotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Move(MoveNotation),
    Quit,
}

pub trait Player {
    fn name(&self) -> &str;

    /// Propose a move for the side to move.
    ///
    /// The board is lent mutably so the player can run legality queries;
    /// it must be handed back unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        generator: &dyn MoveGenerator,
    ) -> ChessResult<PlayerAction>;

    /// Called when the session refuses the last proposed move.
    fn reject_move(&mut self, _notation: &MoveNotation) -> ChessResult<()> {
        Ok(())
    }
}

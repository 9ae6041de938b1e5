//! Computer player choosing uniformly among legal moves.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::players::player_trait::{Player, PlayerAction};
use crate::utils::long_algebraic::{move_to_long_algebraic, MoveNotation};

pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Same seed, same sequence of choices for the same positions.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        generator: &dyn MoveGenerator,
    ) -> ChessResult<PlayerAction> {
        let side = game_state.side_to_move;
        let legal_moves = generator.legal_moves(game_state, side)?;

        let Some(&mv) = legal_moves.as_slice().choose(&mut self.rng) else {
            debug!("{}: no legal moves, giving up the turn", self.name);
            return Ok(PlayerAction::Quit);
        };

        debug!(
            "{}: picked {} of {} legal moves",
            self.name,
            move_to_long_algebraic(mv)?,
            legal_moves.len()
        );
        Ok(PlayerAction::Move(MoveNotation { mv, piece: None }))
    }
}

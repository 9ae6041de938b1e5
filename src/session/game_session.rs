//! Two-player game loop.
//!
//! A `GameSession` seats a player on each side, asks the side to move for a
//! move until one is legal, applies it, hands the turn over, and stops when
//! the derived status is terminal, the ply limit is hit, or a player leaves.

use std::io::Write;

use log::{error, info, warn};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::players::player_trait::{Player, PlayerAction};
use crate::utils::long_algebraic::{move_to_long_algebraic, MoveNotation};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub starting_fen: String,
    /// Stop after this many plies; `None` plays until a result.
    pub max_plies: Option<u16>,
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_fen: STARTING_POSITION_FEN.to_owned(),
            max_plies: None,
            show_board: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
    Aborted { by: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Played(Move),
    Quit,
}

pub struct GameSession<W> {
    game_state: GameState,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    generator: Box<dyn MoveGenerator>,
    config: SessionConfig,
    output: W,
    played_moves: Vec<String>,
}

impl<W: Write> GameSession<W> {
    pub fn new(
        config: SessionConfig,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        generator: Box<dyn MoveGenerator>,
        output: W,
    ) -> ChessResult<Self> {
        let game_state = GameState::from_fen(&config.starting_fen)?;
        Ok(Self {
            game_state,
            white,
            black,
            generator,
            config,
            output,
            played_moves: Vec::new(),
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Moves played so far in long algebraic notation.
    pub fn played_moves(&self) -> &[String] {
        &self.played_moves
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::Light => self.white.as_ref(),
            Color::Dark => self.black.as_ref(),
        }
    }

    /// Ask the side to move for moves until one is legal, then play it.
    pub fn play_turn(&mut self) -> ChessResult<TurnResult> {
        let side = self.game_state.side_to_move;
        let player = match side {
            Color::Light => &mut self.white,
            Color::Dark => &mut self.black,
        };

        let mv = loop {
            let notation = match player.choose_move(&mut self.game_state, self.generator.as_ref())? {
                PlayerAction::Quit => {
                    info!("{} ({}) left the game", player.name(), side.name());
                    return Ok(TurnResult::Quit);
                }
                PlayerAction::Move(notation) => notation,
            };

            if accepts(self.generator.as_ref(), &mut self.game_state, &notation)? {
                break notation.mv;
            }
            warn!(
                "rejected {} from {} ({})",
                move_to_long_algebraic(notation.mv)?,
                player.name(),
                side.name()
            );
            player.reject_move(&notation)?;
        };

        apply_move(&mut self.game_state, mv)?;
        self.game_state.toggle_side_to_move();

        let played = move_to_long_algebraic(mv)?;
        info!("{} ({}) played {}", player.name(), side.name(), played);
        self.played_moves.push(played);
        Ok(TurnResult::Played(mv))
    }

    /// Play until a result, the ply limit, or a player quits.
    ///
    /// Errors end the game. Invariant violations (a missing king, an undo
    /// with an empty log) are logged with the position they were found in.
    pub fn play(&mut self) -> ChessResult<SessionOutcome> {
        self.run().map_err(|err| {
            if err.is_invariant_violation() {
                error!(
                    "game state corrupted after {} plies at '{}': {err}",
                    self.played_moves.len(),
                    self.game_state.get_fen()
                );
            }
            err
        })
    }

    fn run(&mut self) -> ChessResult<SessionOutcome> {
        info!(
            "starting game from '{}' with {} legality",
            self.game_state.get_fen(),
            self.generator.name()
        );
        if self.config.show_board {
            writeln!(self.output, "{}", render_game_state(&self.game_state))?;
        }

        loop {
            let side = self.game_state.side_to_move;
            match game_status(self.generator.as_ref(), &mut self.game_state)? {
                GameStatus::Checkmate { winner } => return Ok(SessionOutcome::Checkmate { winner }),
                GameStatus::Stalemate => return Ok(SessionOutcome::Stalemate),
                GameStatus::Ongoing { in_check: true } => {
                    writeln!(self.output, "{} is in check!", side.name())?;
                }
                GameStatus::Ongoing { in_check: false } => {}
            }

            if let Some(limit) = self.config.max_plies {
                if self.played_moves.len() >= usize::from(limit) {
                    info!("ply limit {limit} reached");
                    return Ok(SessionOutcome::MaxPlies);
                }
            }

            if self.play_turn()? == TurnResult::Quit {
                return Ok(SessionOutcome::Aborted { by: side });
            }
            if self.config.show_board {
                writeln!(self.output, "\n{}", render_game_state(&self.game_state))?;
            }
        }
    }

    pub fn announce(&self, outcome: SessionOutcome) -> String {
        match outcome {
            SessionOutcome::Checkmate { winner } => format!(
                "Checkmate! Congratulations {}! You won!!",
                self.player(winner).name()
            ),
            SessionOutcome::Stalemate => "Stalemate! It's a draw.".to_owned(),
            SessionOutcome::MaxPlies => format!(
                "Game stopped after {} plies without a result.",
                self.played_moves.len()
            ),
            SessionOutcome::Aborted { by } => format!("{} left the game.", self.player(by).name()),
        }
    }
}

/// A piece letter, when given, must name the piece on the origin square.
fn accepts(
    generator: &dyn MoveGenerator,
    game_state: &mut GameState,
    notation: &MoveNotation,
) -> ChessResult<bool> {
    if let Some(kind) = notation.piece {
        if game_state.piece_at(notation.mv.from).map(|piece| piece.kind) != Some(kind) {
            return Ok(false);
        }
    }
    generator.is_legal_move(game_state, notation.mv)
}

//! Human player reading moves from a line-oriented console.
//!
//! Accepted input, one command per line:
//! - a move such as `e2e4`, `e2-e4`, `Ng1f3`;
//! - `hint <square>` to list where the piece on that square may go;
//! - `quit`, or end of input, to leave the game.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::players::player_trait::{Player, PlayerAction};
use crate::utils::algebraic::{algebraic_to_coord, coords_to_algebraic_list};
use crate::utils::long_algebraic::{parse_move_notation, MoveNotation};

pub const INSTRUCTIONS: &str = "\
Enter moves as origin and destination squares, optionally with a piece letter:
  e2e4, e2-e4, Pe2-e4, Ng1f3
Type 'hint <square>' (for example 'hint g1') to list the moves of a piece.
Type 'quit' to leave the game.";

pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_hint(
        &mut self,
        square: &str,
        game_state: &mut GameState,
        generator: &dyn MoveGenerator,
    ) -> ChessResult<()> {
        let from = match algebraic_to_coord(square) {
            Ok(coord) => coord,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };

        if game_state.piece_at(from).is_none() {
            writeln!(self.output, "There is no piece on {square}.")?;
            return Ok(());
        }

        let destinations = generator.legal_destinations(game_state, from)?;
        if destinations.is_empty() {
            writeln!(self.output, "The piece on {square} has no legal moves.")?;
        } else {
            writeln!(
                self.output,
                "Valid moves for {square}: {}",
                coords_to_algebraic_list(&destinations)?
            )?;
        }
        Ok(())
    }
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    /// Player on the process's standard streams.
    ///
    /// Both seats may be console players, so input is not locked for the
    /// player's lifetime. A one-byte buffer leaves unread lines in the shared
    /// stdin buffer for the other seat.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::with_capacity(1, io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        generator: &dyn MoveGenerator,
    ) -> ChessResult<PlayerAction> {
        let mut line = String::new();
        loop {
            writeln!(self.output, "\n{}, please enter your move:", self.name)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("{}: end of input", self.name);
                return Ok(PlayerAction::Quit);
            }

            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if command.eq_ignore_ascii_case("quit") {
                return Ok(PlayerAction::Quit);
            }
            if let Some(square) = hint_square(command) {
                self.show_hint(square, game_state, generator)?;
                continue;
            }

            match parse_move_notation(command) {
                Ok(notation) => return Ok(PlayerAction::Move(notation)),
                Err(err) => writeln!(self.output, "Invalid move: {err}")?,
            }
        }
    }

    fn reject_move(&mut self, _notation: &MoveNotation) -> ChessResult<()> {
        writeln!(self.output, "Invalid move")?;
        Ok(())
    }
}

/// Square named by a `hint <square>` command; the keyword is
/// case-insensitive and must be followed by whitespace.
fn hint_square(command: &str) -> Option<&str> {
    let (keyword, square) = command.split_once(char::is_whitespace)?;
    keyword.eq_ignore_ascii_case("hint").then(|| square.trim())
}

//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type of the crate. Variants fall into
//! two groups:
//! - input errors (malformed position strings or move notation), which are
//!   recoverable and suitable for showing to a user;
//! - invariant violations (undo with an empty move log, a side without a
//!   king), which indicate a bug or a corrupted game state and are not meant
//!   to be recovered from. `is_invariant_violation` tells them apart.
//!
//! An illegal move request is not an error: legality queries return `false`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Coord};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A required whitespace-separated FEN field is absent.
    MissingFenField(&'static str),

    /// Board layout did not contain exactly eight ranks.
    ///
    /// Payload: the number of ranks found.
    InvalidFenRankCount(usize),

    /// A rank did not describe exactly eight files.
    ///
    /// Payload: (rank label 1..=8, files described).
    InvalidFenRankWidth((u8, usize)),

    /// Unrecognized character in the board layout.
    InvalidFenToken(char),

    /// Side-to-move field was not `w` or `b`.
    InvalidSideToMove(String),

    /// A square or move token could not be parsed.
    InvalidAlgebraicString(String),

    /// A move named a square outside the 8x8 board.
    OffBoardSquare(Coord),

    /// Tried to apply a move whose origin square is empty.
    EmptyOriginSquare(Coord),

    /// `undo_move` called with an empty move log.
    EmptyUndoStack,

    /// No king of the given color is on the board.
    MissingKing(Color),

    /// Reading a move from, or writing to, the console failed.
    ConsoleIo(String),
}

impl ChessErrors {
    /// True for errors that can only arise from a programming error or a
    /// corrupted board.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ChessErrors::EmptyUndoStack | ChessErrors::MissingKing(_))
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::MissingFenField(field) => write!(f, "missing {field} in position string"),
            ChessErrors::InvalidFenRankCount(count) => {
                write!(f, "board layout must contain 8 ranks, found {count}")
            }
            ChessErrors::InvalidFenRankWidth((rank, files)) => {
                write!(f, "rank {rank} describes {files} files instead of 8")
            }
            ChessErrors::InvalidFenToken(ch) => {
                write!(f, "invalid character '{ch}' in board layout")
            }
            ChessErrors::InvalidSideToMove(token) => {
                write!(f, "invalid side-to-move field '{token}', expected 'w' or 'b'")
            }
            ChessErrors::InvalidAlgebraicString(token) => {
                write!(f, "cannot parse '{token}' as a square or move")
            }
            ChessErrors::OffBoardSquare(coord) => write!(
                f,
                "square (row {}, col {}) is off the board",
                coord.row, coord.col
            ),
            ChessErrors::EmptyOriginSquare(coord) => write!(
                f,
                "no piece on origin square (row {}, col {})",
                coord.row, coord.col
            ),
            ChessErrors::EmptyUndoStack => write!(f, "undo requested with an empty move log"),
            ChessErrors::MissingKing(color) => {
                write!(f, "board has no {} king", color.name().to_lowercase())
            }
            ChessErrors::ConsoleIo(msg) => write!(f, "console I/O failed: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::ConsoleIo(err.to_string())
    }
}

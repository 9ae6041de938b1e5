//! Core mutable board state.
//!
//! `GameState` is the central model of the engine: the 8×8 grid of squares,
//! the side to move, and the move log used by apply/undo. Every other
//! component is a function over a `GameState`.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// `[row][col]`, row 0 = rank 1.
    pub squares: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,

    /// Move log: pushed by `apply_move`, popped by `undo_move`.
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Color::Light,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, Light to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        if coord.is_on_board() {
            self.squares[coord.row as usize][coord.col as usize]
        } else {
            None
        }
    }

    /// Overwrite a square, returning what was there. Off-board coordinates
    /// leave the board untouched and return `None`.
    #[inline]
    pub fn replace_piece(&mut self, coord: Coord, piece: Option<Piece>) -> Option<Piece> {
        if !coord.is_on_board() {
            return None;
        }
        std::mem::replace(&mut self.squares[coord.row as usize][coord.col as usize], piece)
    }

    #[inline]
    pub fn set_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        self.replace_piece(coord, piece);
    }

    /// Hand the move to the other side. Never done implicitly by
    /// `apply_move`, so apply/undo can be used for look-ahead.
    #[inline]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// All pieces of one color with their squares, row-major.
    pub fn pieces_of(&self, color: Color) -> Vec<(Coord, Piece)> {
        Coord::all()
            .filter_map(|coord| self.piece_at(coord).map(|piece| (coord, piece)))
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// Last applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<&UndoState> {
        self.undo_stack.last()
    }
}

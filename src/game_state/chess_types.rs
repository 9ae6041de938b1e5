//! Core value types shared by every subsystem.
//!
//! A square is `Option<Piece>`: `None` is empty, `Some(piece)` carries the
//! piece kind and its color. Compact signed-integer piece codes (magnitude =
//! kind, sign = color) are available through `Piece::code` /
//! `Piece::from_code` for interop and diagnostics.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Side to move. `Light` plays the White pieces, `Dark` the Black pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign of this color's piece codes.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        self.sign()
    }

    /// Row on which this color's pawns start and may double step.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    /// Magnitude of the signed piece code.
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Knight => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase notation letter (`P`, `N`, `B`, `R`, `Q`, `K`).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of `letter`, case-insensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Signed piece code: positive for Light, negative for Dark.
    #[inline]
    pub const fn code(self) -> i8 {
        self.kind.code() * self.color.sign()
    }

    /// Decode a signed piece code. Zero and unknown magnitudes yield `None`.
    pub fn from_code(code: i8) -> Option<Self> {
        let kind = PieceKind::from_code(code.checked_abs()?)?;
        let color = if code > 0 { Color::Light } else { Color::Dark };
        Some(Self::new(kind, color))
    }

    /// FEN letter: uppercase for Light, lowercase for Dark.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        Some(Self::new(PieceKind::from_letter(ch)?, color))
    }
}

/// Board coordinate. Row 0 is rank "1", column 0 is file "a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column delta; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Every square, row-major from a1 to h8.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

/// A move as an ordered pair of squares. The moving piece is read from the
/// board when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

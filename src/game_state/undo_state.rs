use crate::game_state::chess_types::*;

/// Single move-log record for `apply_move` / `undo_move`.
///
/// `moved_piece` is the piece as it stood on `from` before the move, so a
/// promoted pawn is restored as a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Coord,
    pub moved_piece: Piece,
    pub to: Coord,
    pub captured_piece: Option<Piece>,
}

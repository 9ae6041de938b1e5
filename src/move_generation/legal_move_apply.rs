//! In-place make/unmake of moves.
//!
//! `apply_move` pushes an `UndoState` before touching the board and
//! `undo_move` pops it, so any sequence of applies followed by the same
//! number of undos restores the board exactly. A rejected move leaves both
//! the board and the log untouched. Neither function changes the side to
//! move.

use log::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{PROMOTION_KIND, PROMOTION_ROWS};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn apply_move(game_state: &mut GameState, mv: Move) -> ChessResult<()> {
    if let Some(off_board) = [mv.from, mv.to].into_iter().find(|sq| !sq.is_on_board()) {
        return Err(ChessErrors::OffBoardSquare(off_board));
    }

    let moved_piece = game_state
        .piece_at(mv.from)
        .ok_or(ChessErrors::EmptyOriginSquare(mv.from))?;

    let captured_piece = game_state.piece_at(mv.to);
    game_state.undo_stack.push(UndoState {
        from: mv.from,
        moved_piece,
        to: mv.to,
        captured_piece,
    });

    let placed = if moved_piece.kind == PieceKind::Pawn && PROMOTION_ROWS.contains(&mv.to.row) {
        Piece::new(PROMOTION_KIND, moved_piece.color)
    } else {
        moved_piece
    };

    game_state.set_piece(mv.to, Some(placed));
    game_state.set_piece(mv.from, None);

    trace!(
        "apply {:?} {:?}->{:?} captured={:?} depth={}",
        moved_piece,
        mv.from,
        mv.to,
        captured_piece,
        game_state.undo_stack.len()
    );

    Ok(())
}

/// Reverse the most recent `apply_move` and return its record.
pub fn undo_move(game_state: &mut GameState) -> ChessResult<UndoState> {
    let undo = game_state.undo_stack.pop().ok_or(ChessErrors::EmptyUndoStack)?;

    game_state.set_piece(undo.to, undo.captured_piece);
    game_state.set_piece(undo.from, Some(undo.moved_piece));

    trace!(
        "undo {:?} {:?}->{:?} depth={}",
        undo.moved_piece,
        undo.from,
        undo.to,
        game_state.undo_stack.len()
    );

    Ok(undo)
}

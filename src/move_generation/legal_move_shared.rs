use crate::game_state::{chess_types::*, game_state::GameState};

/// Filter applied to every generated destination list: keep on-board
/// squares that hold neither a piece of `mover`'s color nor an enemy king.
///
/// Excluding the enemy king means kings are never captured; the check
/// oracle compensates by disguising the king it asks about.
#[inline]
pub fn retain_reachable(game_state: &GameState, mover: Color, destinations: &mut Vec<Coord>) {
    destinations.retain(|&to| {
        to.is_on_board()
            && match game_state.piece_at(to) {
                None => true,
                Some(piece) => piece.color != mover && piece.kind != PieceKind::King,
            }
    });
}

/// Piece standing on `square` if it belongs to the side to move.
#[inline]
pub fn own_piece_on(game_state: &GameState, square: Coord) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color == game_state.side_to_move)
}

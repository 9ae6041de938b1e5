//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and pawn
//! promotion parameters.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rows on which a pawn is promoted, regardless of its color.
pub const PROMOTION_ROWS: [u8; 2] = [0, 7];

/// Pawns always promote to this kind; there is no under-promotion.
pub const PROMOTION_KIND: PieceKind = PieceKind::Queen;

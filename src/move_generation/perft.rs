//! Move-path enumeration (perft) over apply/undo.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth. Every node is
//! visited by applying a move, handing the turn over, recursing, and then
//! reversing both, so the board is left exactly as it was found.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::MoveGenerator;

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let side = game_state.side_to_move;
    let moves = generator.legal_moves(game_state, side)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        nodes += visit(generator, game_state, mv, depth - 1)?;
    }
    Ok(nodes)
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let side = game_state.side_to_move;
    let moves = generator.legal_moves(game_state, side)?;
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        out.push((mv, visit(generator, game_state, mv, depth - 1)?));
    }
    Ok(out)
}

fn visit<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: Move,
    remaining: u8,
) -> ChessResult<u64> {
    apply_move(game_state, mv)?;
    game_state.toggle_side_to_move();
    let nodes = perft(generator, game_state, remaining);
    game_state.toggle_side_to_move();
    undo_move(game_state)?;
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 0).expect("perft should run"), 1);
    }

    #[test]
    fn starting_position_matches_reference_counts() {
        let mut game = GameState::new_game();
        let before = game.clone();

        let counts: Vec<u64> = (1..=3)
            .map(|depth| perft(&LegalMoveGenerator, &mut game, depth).expect("perft should run"))
            .collect();

        assert_eq!(counts, vec![20, 400, 8902]);
        assert_eq!(game, before);
    }

    #[test]
    fn endgame_position_matches_reference_counts() {
        // No castling, en passant or promotion is reachable within two plies.
        let mut game =
            GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run"), 14);
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 2).expect("perft should run"), 191);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &mut game, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}

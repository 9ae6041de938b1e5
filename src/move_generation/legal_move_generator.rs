//! Legal move generation.
//!
//! Both generators take the pseudo-legal destinations of a piece and, for
//! each candidate, apply the move, ask whether the mover's king is now
//! attacked, and undo the move before looking at the next one.
//!
//! `LegalMoveGenerator` runs that filter for every candidate.
//! `InCheckOnlyMoveGenerator` runs it only when the mover is already in
//! check and otherwise returns pseudo-legal moves unchanged, which lets a
//! pinned piece expose its own king. It exists for parity experiments with
//! that behaviour and is never the default.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{pseudo_legal_destinations, MoveGenerator};

pub struct LegalMoveGenerator;
pub struct InCheckOnlyMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn legal_destinations(
        &self,
        game_state: &mut GameState,
        from: Coord,
    ) -> ChessResult<Vec<Coord>> {
        let Some(piece) = game_state.piece_at(from) else {
            return Ok(Vec::new());
        };
        let candidates = pseudo_legal_destinations(game_state, from);
        exclude_self_checks(game_state, from, piece.color, candidates)
    }
}

impl MoveGenerator for InCheckOnlyMoveGenerator {
    fn name(&self) -> &'static str {
        "in-check-only"
    }

    fn legal_destinations(
        &self,
        game_state: &mut GameState,
        from: Coord,
    ) -> ChessResult<Vec<Coord>> {
        let Some(piece) = game_state.piece_at(from) else {
            return Ok(Vec::new());
        };
        let candidates = pseudo_legal_destinations(game_state, from);
        if is_king_in_check(game_state, piece.color)? {
            exclude_self_checks(game_state, from, piece.color, candidates)
        } else {
            Ok(candidates)
        }
    }
}

/// Simulate each candidate and keep those that leave `mover`'s king safe.
fn exclude_self_checks(
    game_state: &mut GameState,
    from: Coord,
    mover: Color,
    candidates: Vec<Coord>,
) -> ChessResult<Vec<Coord>> {
    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        apply_move(game_state, Move::new(from, to))?;
        let exposed = is_king_in_check(game_state, mover);
        undo_move(game_state)?;

        if !exposed? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Legal destinations of the piece on `from` under `LegalMoveGenerator`.
pub fn legal_destinations(game_state: &mut GameState, from: Coord) -> ChessResult<Vec<Coord>> {
    LegalMoveGenerator.legal_destinations(game_state, from)
}

pub fn is_legal_move(game_state: &mut GameState, mv: Move) -> ChessResult<bool> {
    LegalMoveGenerator.is_legal_move(game_state, mv)
}

pub fn legal_moves(game_state: &mut GameState, color: Color) -> ChessResult<Vec<Move>> {
    LegalMoveGenerator.legal_moves(game_state, color)
}

pub fn has_any_legal_move(game_state: &mut GameState, color: Color) -> ChessResult<bool> {
    LegalMoveGenerator.has_any_legal_move(game_state, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    const DARK_MATED: &str = "rnbqkbnr/ppppp2p/5p2/6pQ/3PP3/8/PPP2PPP/RNB1KBNR b KQkq - 1 3";
    const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

    fn sorted(mut coords: Vec<Coord>) -> Vec<Coord> {
        coords.sort();
        coords
    }

    #[test]
    fn starting_king_has_no_legal_destinations() {
        let mut game = GameState::new_game();
        let destinations =
            legal_destinations(&mut game, Coord::new(0, 4)).expect("generation should succeed");
        assert!(destinations.is_empty());
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let moves = legal_moves(&mut game, Color::Light).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
        assert_eq!(
            legal_moves(&mut game, Color::Dark).expect("generation should succeed").len(),
            20
        );
    }

    #[test]
    fn rook_ray_ends_on_captured_piece() {
        let mut game = GameState::from_fen("7k/8/8/8/8/2K5/8/R6n w - - 0 1").expect("FEN should parse");
        let destinations =
            legal_destinations(&mut game, Coord::new(0, 0)).expect("generation should succeed");

        let along_rank: Vec<Coord> = sorted(
            destinations
                .iter()
                .copied()
                .filter(|coord| coord.row == 0)
                .collect(),
        );
        let expected: Vec<Coord> = (1..8).map(|col| Coord::new(0, col)).collect();
        assert_eq!(along_rank, expected);
    }

    #[test]
    fn pawn_double_step_only_once() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/4P3/K7 w - - 0 1").expect("FEN should parse");
        let e2 = Coord::new(1, 4);
        let e4 = Coord::new(3, 4);

        assert_eq!(
            sorted(legal_destinations(&mut game, e2).expect("generation should succeed")),
            vec![Coord::new(2, 4), e4]
        );

        apply_move(&mut game, Move::new(e2, e4)).expect("e2e4 should apply");
        assert_eq!(
            legal_destinations(&mut game, e4).expect("generation should succeed"),
            vec![Coord::new(4, 4)]
        );
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let mut game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        let bishop = Coord::new(1, 4);

        assert!(legal_destinations(&mut game, bishop)
            .expect("generation should succeed")
            .is_empty());
        assert_eq!(game, before);
    }

    #[test]
    fn in_check_only_generator_lets_pinned_piece_move() {
        let mut game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let bishop = Coord::new(1, 4);

        let loose = InCheckOnlyMoveGenerator
            .legal_destinations(&mut game, bishop)
            .expect("generation should succeed");
        assert_eq!(
            loose,
            pseudo_legal_destinations(&game, bishop),
            "pseudo-legal moves pass through when not in check"
        );
        assert!(!loose.is_empty());
    }

    #[test]
    fn in_check_only_generator_filters_when_in_check() {
        let mut game =
            GameState::from_fen("4r1k1/8/8/8/8/8/3B4/4K3 w - - 0 1").expect("FEN should parse");
        let bishop = Coord::new(1, 3);

        let strict = LegalMoveGenerator
            .legal_destinations(&mut game, bishop)
            .expect("generation should succeed");
        let loose = InCheckOnlyMoveGenerator
            .legal_destinations(&mut game, bishop)
            .expect("generation should succeed");

        assert_eq!(strict, vec![Coord::new(2, 4)]);
        assert_eq!(loose, strict);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut game =
            GameState::from_fen("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let destinations = sorted(
            legal_destinations(&mut game, Coord::new(0, 4)).expect("generation should succeed"),
        );
        assert_eq!(
            destinations,
            vec![Coord::new(0, 5), Coord::new(1, 4), Coord::new(1, 5)]
        );
    }

    #[test]
    fn fools_mate_leaves_light_without_moves() {
        let mut game = GameState::from_fen(FOOLS_MATE).expect("FEN should parse");
        assert!(is_king_in_check(&mut game, Color::Light).expect("check test should run"));
        assert!(!has_any_legal_move(&mut game, Color::Light).expect("generation should succeed"));
    }

    #[test]
    fn mirrored_mate_leaves_dark_without_moves() {
        let mut game = GameState::from_fen(DARK_MATED).expect("FEN should parse");
        let before = game.clone();
        assert!(is_king_in_check(&mut game, Color::Dark).expect("check test should run"));
        assert!(!has_any_legal_move(&mut game, Color::Dark).expect("generation should succeed"));
        assert_eq!(game, before);
    }

    #[test]
    fn stalemate_has_no_moves_and_no_check() {
        let mut game = GameState::from_fen(STALEMATE).expect("FEN should parse");
        assert!(!is_king_in_check(&mut game, Color::Dark).expect("check test should run"));
        assert!(!has_any_legal_move(&mut game, Color::Dark).expect("generation should succeed"));
        assert!(has_any_legal_move(&mut game, Color::Light).expect("generation should succeed"));
    }

    #[test]
    fn is_legal_move_requires_side_to_move() {
        let mut game = GameState::new_game();
        let e2e4 = Move::new(Coord::new(1, 4), Coord::new(3, 4));
        let e7e5 = Move::new(Coord::new(6, 4), Coord::new(4, 4));
        let e2e5 = Move::new(Coord::new(1, 4), Coord::new(4, 4));
        let empty = Move::new(Coord::new(3, 3), Coord::new(4, 3));

        assert!(is_legal_move(&mut game, e2e4).expect("query should succeed"));
        assert!(!is_legal_move(&mut game, e7e5).expect("query should succeed"));
        assert!(!is_legal_move(&mut game, e2e5).expect("query should succeed"));
        assert!(!is_legal_move(&mut game, empty).expect("query should succeed"));

        game.toggle_side_to_move();
        assert!(is_legal_move(&mut game, e7e5).expect("query should succeed"));
    }

    #[test]
    fn destinations_never_hold_own_pieces() {
        let positions = [
            crate::game_state::chess_rules::STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];

        for fen in positions {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let before = game.clone();
            for color in [Color::Light, Color::Dark] {
                for (from, piece) in game.pieces_of(color) {
                    for to in legal_destinations(&mut game, from).expect("generation should succeed") {
                        assert!(to.is_on_board());
                        assert!(
                            game.piece_at(to).map_or(true, |target| target.color != piece.color),
                            "{fen}: {from:?} -> {to:?} lands on own piece"
                        );
                    }
                }
            }
            assert_eq!(game, before, "{fen}: generation must not change the board");
        }
    }

    #[test]
    fn apply_undo_round_trips_every_legal_move() {
        let mut game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        )
        .expect("FEN should parse");
        let before = game.clone();

        for mv in legal_moves(&mut game, Color::Light).expect("generation should succeed") {
            apply_move(&mut game, mv).expect("legal move should apply");
            undo_move(&mut game).expect("undo should succeed");
            assert_eq!(game, before, "{mv:?} did not round-trip");
        }
    }
}

//! Crate root module declarations for the duel_chess engine.
//!
//! Exposes the board model, piece movement rules, legality and check
//! detection, the console players and game session, and notation helpers so
//! the binaries, benchmarks and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod leaper_moves;
    pub mod pawn_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod players {
    pub mod console_player;
    pub mod player_trait;
    pub mod random_player;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

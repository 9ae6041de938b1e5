//! Interactive two-player chess at the console.
//!
//! Run with:
//! `cargo run --release`
//! `cargo run --release -- --black random --seed 7`
//! `DUEL_CHESS_LOG=debug cargo run -- --white random --black random --max-plies 40`

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use duel_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use duel_chess::move_generation::legal_move_generator::{
    InCheckOnlyMoveGenerator, LegalMoveGenerator,
};
use duel_chess::move_generation::move_generator::MoveGenerator;
use duel_chess::players::console_player::{ConsolePlayer, INSTRUCTIONS};
use duel_chess::players::player_trait::Player;
use duel_chess::players::random_player::RandomPlayer;
use duel_chess::session::game_session::{GameSession, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    Human,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Legality {
    /// Never allow a move that leaves the mover's king attacked.
    Strict,
    /// Only filter self-check while already in check.
    InCheckOnly,
}

#[derive(Debug, Parser)]
#[command(name = "duel_chess", version, about = "Two-player chess at the console")]
struct Cli {
    /// Starting position in FEN.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, value_enum, default_value_t = Seat::Human)]
    white: Seat,

    #[arg(long, value_enum, default_value_t = Seat::Human)]
    black: Seat,

    #[arg(long, default_value = "White")]
    white_name: String,

    #[arg(long, default_value = "Black")]
    black_name: String,

    /// Seed for computer players; drawn at random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the game after this many plies.
    #[arg(long)]
    max_plies: Option<u16>,

    #[arg(long, value_enum, default_value_t = Legality::Strict)]
    legality: Legality,
}

fn seat_player(seat: Seat, name: String, seed: u64) -> Box<dyn Player> {
    match seat {
        Seat::Human => Box::new(ConsolePlayer::stdio(name)),
        Seat::Random => Box::new(RandomPlayer::new(name, seed)),
    }
}

fn main() -> Result<(), String> {
    let env = Env::default().filter_or("DUEL_CHESS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("computer player seed {seed}");

    let generator: Box<dyn MoveGenerator> = match cli.legality {
        Legality::Strict => Box::new(LegalMoveGenerator),
        Legality::InCheckOnly => Box::new(InCheckOnlyMoveGenerator),
    };

    if cli.white == Seat::Human || cli.black == Seat::Human {
        println!("{INSTRUCTIONS}\n");
    }

    let white = seat_player(cli.white, cli.white_name, seed);
    let black = seat_player(cli.black, cli.black_name, seed.wrapping_add(1));

    let config = SessionConfig {
        starting_fen: cli.fen,
        max_plies: cli.max_plies,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config, white, black, generator, std::io::stdout())
        .map_err(|e| format!("cannot start game: {e}"))?;

    let outcome = session.play().map_err(|e| {
        if e.is_invariant_violation() {
            format!("internal error, game state corrupted: {e}")
        } else {
            format!("game aborted: {e}")
        }
    })?;
    println!("\n{}", session.announce(outcome));
    println!("moves: {}", session.played_moves().join(" "));
    Ok(())
}

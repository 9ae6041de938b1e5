//! Node-count report for a position.
//!
//! Run with:
//! `cargo run --release --bin perft_report -- --depth 4`
//! `cargo run --release --bin perft_report -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w" --depth 2 --divide`

use std::time::Instant;

use clap::Parser;
use env_logger::Env;

use duel_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use duel_chess::game_state::game_state::GameState;
use duel_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use duel_chess::move_generation::perft::{perft, perft_divide};
use duel_chess::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Parser)]
#[command(name = "perft_report", about = "Count legal move paths from a position")]
struct Cli {
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Also print the node count below each root move at full depth.
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<(), String> {
    let env = Env::default().filter_or("DUEL_CHESS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let mut game = GameState::from_fen(&cli.fen).map_err(|e| format!("bad FEN: {e}"))?;
    let generator = LegalMoveGenerator;

    println!("fen: {}", game.get_fen());
    for depth in 1..=cli.depth {
        let started = Instant::now();
        let nodes = perft(&generator, &mut game, depth).map_err(|e| e.to_string())?;
        let elapsed = started.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth {depth}: {nodes} nodes in {:.3} ms ({:.0} nps)",
            elapsed.as_secs_f64() * 1000.0,
            nps
        );
    }

    if cli.divide && cli.depth > 0 {
        println!("divide at depth {}:", cli.depth);
        let divided = perft_divide(&generator, &mut game, cli.depth).map_err(|e| e.to_string())?;
        for (mv, nodes) in &divided {
            println!("{}: {nodes}", move_to_long_algebraic(*mv).map_err(|e| e.to_string())?);
        }
        println!("total: {}", divided.iter().map(|(_, nodes)| nodes).sum::<u64>());
    }
    Ok(())
}

//! Plays the engines against each other in the terminal.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white hard --black random`
//! `RUST_LOG=debug cargo run --bin self_play -- --seed 7`

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chessbuds_core::engines::chess_ai::ChessAi;
use chessbuds_core::engines::engine_random::RandomEngine;
use chessbuds_core::engines::engine_trait::{Difficulty, Engine, SearchConfig};
use chessbuds_core::game_state::chess_types::{Color, GameState};
use chessbuds_core::utils::game_summary::GameSummary;
use chessbuds_core::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Easy,
    Medium,
    Hard,
    Expert,
    Random,
}

impl PlayerKind {
    fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerKind::Easy => Some(Difficulty::Easy),
            PlayerKind::Medium => Some(Difficulty::Medium),
            PlayerKind::Hard => Some(Difficulty::Hard),
            PlayerKind::Expert => Some(Difficulty::Expert),
            PlayerKind::Random => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Engine self-play in the terminal")]
struct Args {
    #[arg(long, value_enum, default_value = "medium")]
    white: PlayerKind,

    #[arg(long, value_enum, default_value = "medium")]
    black: PlayerKind,

    /// Stop after this many plies even if the game is not over.
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Seed for every engine's RNG; omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this position instead of the initial one (disables the book).
    #[arg(long)]
    fen: Option<String>,

    #[arg(long)]
    no_book: bool,

    /// Print the board after every ply.
    #[arg(long)]
    verbose: bool,
}

fn build_engine(kind: PlayerKind, seed: Option<u64>, use_book: bool) -> Box<dyn Engine> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    match kind.difficulty() {
        Some(difficulty) => Box::new(ChessAi::with_rng(rng).with_config(SearchConfig {
            use_book,
            ..SearchConfig::for_difficulty(difficulty)
        })),
        None => Box::new(RandomEngine::with_rng(rng)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut game = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    let mut white = build_engine(args.white, args.seed, !args.no_book);
    let mut black = build_engine(args.black, args.seed.map(|s| s.wrapping_add(1)), !args.no_book);
    info!(white = white.name(), black = black.name(), "starting game");

    for _ in 0..args.max_plies {
        if game.game_over() {
            break;
        }
        let side = game.turn();
        let engine = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let out = engine.choose_move(&mut game, side);
        let Some(mv) = out.best_move else {
            warn!(?side, "engine returned no move in a running game");
            break;
        };
        let lan = mv.to_lan(None);
        if !game.commit(mv, None) {
            warn!(%lan, "engine move rejected");
            break;
        }
        info!(ply = game.move_count(), %lan, book = out.from_book, score = ?out.score, "played");
        if args.verbose {
            println!("{}", render_game_state(&game));
        }
    }

    println!("{}", render_game_state(&game));
    println!("{}", game.to_fen());
    match GameSummary::from_game(&game) {
        Some(summary) => println!(
            "{} after {} moves ({})",
            summary.detail,
            summary.full_moves(),
            summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("stopped after {} plies, game still running", game.move_count()),
    }
    Ok(())
}

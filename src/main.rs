//! Gomoku engine command line.
//!
//! - `gomoku suggest --side white < board.txt` - print the engine's move for a text board
//! - `gomoku selfplay --black hard --white easy` - let two engines play each other

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gomoku::{Board, Difficulty, Engine, EngineConfig, GameState, Stone};

/// Minimax Gomoku engine
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Per-move search budget in milliseconds
    #[arg(long, global = true)]
    time_limit_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a move for a board read from a file or stdin
    Suggest {
        /// Side to move: black or white
        #[arg(long)]
        side: Stone,
        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        /// Text board: 15 rows of `.`, `X`, `O`
        #[arg(long)]
        board: Option<PathBuf>,
    },
    /// Play a full game between two engines
    Selfplay {
        #[arg(long, default_value_t = Difficulty::Medium)]
        black: Difficulty,
        #[arg(long, default_value_t = Difficulty::Medium)]
        white: Difficulty,
        /// Stop after this many moves
        #[arg(long, default_value_t = gomoku::board::TOTAL_CELLS)]
        max_moves: usize,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.time_limit_ms.is_some() {
        config.time_limit_ms = cli.time_limit_ms;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(&cli)?;
    info!(depths = ?config.depths, time_limit_ms = ?config.time_limit_ms, "configuration loaded");

    match &cli.command {
        Commands::Suggest {
            side,
            difficulty,
            board,
        } => suggest(config, *side, *difficulty, board.as_deref()),
        Commands::Selfplay {
            black,
            white,
            max_moves,
        } => selfplay(config, *black, *white, *max_moves),
    }
}

fn suggest(config: EngineConfig, side: Stone, difficulty: Difficulty, path: Option<&std::path::Path>) -> Result<()> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read board {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read board from stdin")?;
            buf
        }
    };
    let board: Board = text.parse().context("invalid board")?;

    let mut engine = Engine::with_config(difficulty, config)?;
    let result = engine.select_move_with_stats(&board, side);
    match result.best_move {
        Some(pos) => {
            println!("{} {}", pos.row, pos.col);
            info!(
                search_type = ?result.search_type,
                score = result.score,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "suggested {pos}"
            );
        }
        None => println!("no move: board is full"),
    }
    Ok(())
}

fn selfplay(config: EngineConfig, black: Difficulty, white: Difficulty, max_moves: usize) -> Result<()> {
    let mut black_engine = Engine::with_config(black, config.clone())?;
    let mut white_engine = Engine::with_config(white, config)?;
    let mut game = GameState::new();

    while !game.is_over() && game.history.len() < max_moves {
        let side = game.current;
        let engine = match side {
            Stone::Black => &mut black_engine,
            _ => &mut white_engine,
        };
        let result = engine.select_move_with_stats(&game.board, side);
        let Some(pos) = result.best_move else {
            break;
        };
        game.play(pos)?;
        println!(
            "{:>3}. {:?} {} ({:?}, {} nodes, {}ms)",
            game.history.len(),
            side,
            pos,
            result.search_type,
            result.nodes,
            result.time_ms
        );
    }

    print!("{}", game.board);
    match game.winner {
        Some(winner) => println!("{winner:?} wins after {} moves", game.history.len()),
        None if game.is_draw() => println!("draw: board is full"),
        None => println!("stopped after {} moves", game.history.len()),
    }
    Ok(())
}

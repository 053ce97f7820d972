mod interactive;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use othello_agents::{play_game, search, AlphaBetaAgent, RandomAgent, SearchConfig, DEFAULT_MAX_DEPTH};
use othello_core::{perft, perft_divide, GameState, Player};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "othello", about = "Othello engine with alpha-beta search")]
struct Cli {
    /// Log filter, e.g. `info` or `othello_agents=debug`. Falls back to RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine in the terminal
    Play {
        #[arg(long, env = "OTHELLO_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
        depth: u8,
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, value_enum, default_value_t = Side::Black)]
        human_color: Side,
    },
    /// Alpha-beta against the random agent, alternating colours
    Duel {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long, env = "OTHELLO_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
        depth: u8,
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Search a position once and print the result
    Search {
        #[arg(long, env = "OTHELLO_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
        depth: u8,
        /// Position in board notation; the opening position if omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Count move paths from the opening position
    Perft {
        depth: u8,
        #[arg(long, default_value_t = 8)]
        size: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn display_board(state: &GameState) {
    let size = state.size();
    let header: String = (0..size).map(|c| format!("{} ", (b'a' + c as u8) as char)).collect();
    println!("\n   {header}");

    for (r, row) in state.board().rows().enumerate() {
        print!("{:>2} ", r + 1);
        for cell in row {
            print!("{} ", cell.to_char());
        }
        println!();
    }

    let count = state.count_tokens();
    println!(
        "\n{} to move | Black {} - White {}",
        state.player_in_turn(),
        count.black,
        count.white
    );
}

fn run_duel(games: u32, depth: u8, size: usize, seed: Option<u64>) -> Result<()> {
    let (mut wins, mut losses, mut draws) = (0, 0, 0);

    for game in 0..games {
        let state = GameState::with_size(size, Player::Black)?;
        let mut engine = AlphaBetaAgent::new(depth);
        let mut random = match seed {
            Some(seed) => RandomAgent::with_seed(seed.wrapping_add(u64::from(game))),
            None => RandomAgent::new(),
        };

        let engine_color = if game % 2 == 0 { Player::Black } else { Player::White };
        let record = match engine_color {
            Player::Black => play_game(state, &mut engine, &mut random)?,
            Player::White => play_game(state, &mut random, &mut engine)?,
        };

        let score = record.score();
        let outcome = match record.winner() {
            Some(p) if p == engine_color => {
                wins += 1;
                "win"
            }
            Some(_) => {
                losses += 1;
                "loss"
            }
            None => {
                draws += 1;
                "draw"
            }
        };
        println!(
            "Game {:>3}: engine as {:<5} {:<4} ({} - {})",
            game + 1,
            engine_color.to_string(),
            outcome,
            score.black,
            score.white
        );
    }

    println!("\nEngine: {wins} wins, {losses} losses, {draws} draws");
    Ok(())
}

fn run_search(depth: u8, file: Option<PathBuf>) -> Result<()> {
    let state = match file {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GameState::from_notation(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => GameState::new(),
    };

    display_board(&state);
    println!("Searching to depth {depth}...");

    let start = Instant::now();
    let result = search(&state, &SearchConfig::depth(depth));
    let elapsed = start.elapsed();

    match result.best_move {
        Some(best_move) => println!("\nBest move: {best_move}"),
        None if state.is_finished() => println!("\nGame is over"),
        None => println!("\nNo legal moves available, {} must pass", state.player_in_turn()),
    }
    println!("Score: {}", result.score);
    println!("Nodes: {}", result.nodes);
    println!("Cutoffs: {}", result.cutoffs);
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_perft(depth: u8, size: usize) -> Result<()> {
    let state = GameState::with_size(size, Player::Black)?;
    println!("Running perft({depth}) on {size}x{size}...");

    if depth <= 3 {
        let results = perft_divide(&state, depth);
        let mut total = 0;
        for (mv, count) in &results {
            println!("{mv}: {count}");
            total += count;
        }
        println!("\nTotal: {total}");
    } else {
        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        println!("Nodes: {nodes}");
        println!("Time: {:.2}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Play {
            depth,
            size,
            human_color,
        } => {
            let state = GameState::with_size(size, Player::Black)?;
            let mut game = interactive::InteractiveGame::new(state, depth, human_color.into());
            game.run().context("terminal error")?;
        }
        Command::Duel {
            games,
            depth,
            size,
            seed,
        } => {
            if games == 0 {
                bail!("--games must be at least 1");
            }
            run_duel(games, depth, size, seed)?;
        }
        Command::Search { depth, file } => run_search(depth, file)?,
        Command::Perft { depth, size } => run_perft(depth, size)?,
    }

    Ok(())
}

//! Tic-tac-toe server - CLI entry point
//!
//! Runs the HTTP backend or plays a single turn from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_server::{GameState, ServerConfig, Square, play_turn};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            allowed_origin,
        } => run_http_server(config, host, port, allowed_origin).await,
        Command::Move {
            board,
            board_size,
            seed,
        } => run_single_move(&board, board_size, seed),
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_http_server(
    config_path: std::path::PathBuf,
    host: Option<String>,
    port: Option<u16>,
    allowed_origin: Option<String>,
) -> Result<()> {
    info!("Starting tic-tac-toe AI server");

    let mut config = ServerConfig::load_or_default(&config_path)?.with_env_overrides()?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(origin) = allowed_origin {
        config = config.with_allowed_origin(origin);
    }
    info!(?config, "Effective configuration");

    tictactoe_server::serve(config).await
}

/// Play one AI turn and print the resulting state
#[instrument(skip(board))]
fn run_single_move(board: &str, board_size: usize, seed: Option<u64>) -> Result<()> {
    let squares: Vec<Square> =
        serde_json::from_str(board).context("Board must be a JSON array of \"\", \"X\" or \"O\"")?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = play_turn(GameState::new(squares, board_size), &mut rng)?;
    let rendered = result.to_board()?.display();

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!();
    println!("{}", rendered);
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! Command-line interface for tictactoe_server.

use clap::{Parser, Subcommand};

/// Tic-tac-toe server - an AI opponent over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Tic-tac-toe AI backend for N×N boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to server config file (optional)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Value for Access-Control-Allow-Origin
        #[arg(long)]
        allowed_origin: Option<String>,
    },

    /// Play a single AI turn offline and print the result
    Move {
        /// Board as a JSON array of "", "X" or "O"
        #[arg(short, long)]
        board: String,

        /// Board side length
        #[arg(long, default_value = "3")]
        board_size: usize,

        /// Seed for the heuristic's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

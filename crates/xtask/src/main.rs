//! Development tasks for the battle decision engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod content;

use anyhow::Result;
use clap::Parser;
use commands::{Simulate, Trainers, Weights};
use tracing_subscriber::EnvFilter;

/// Development tasks for the battle decision engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for NPC battle decisions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the trainers in a data directory
    Trainers(Trainers),

    /// Run seeded decisions for a trainer and print the action distribution
    Simulate(Simulate),

    /// Print the move weight vector a trainer would draw from
    Weights(Weights),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Trainers(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
        Command::Weights(cmd) => cmd.execute(),
    }
}

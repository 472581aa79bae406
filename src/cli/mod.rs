//! CLI module for the placemark server
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API and static photo server (default mode)
//! - `migrate`: apply pending database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Placemark - location sharing API
#[derive(Parser)]
#[command(name = "placemark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API and static photo server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

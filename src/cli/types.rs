//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::bench::BenchArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::load::LoadArgs;
use crate::cli::commands::login::LoginArgs;
use crate::cli::commands::register::RegisterArgs;
use crate::cli::commands::verify::VerifyArgs;

#[derive(Parser)]
#[command(name = "latchkey")]
#[command(about = "Latchkey - cached credential lookup service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Latchkey configuration and database
    Init(InitArgs),

    /// Register a credential in the durable store and the cache
    Register(RegisterArgs),

    /// Authenticate a credential, cache tier first
    Login(LoginArgs),

    /// Load synthetic credentials into both tiers
    Load(LoadArgs),

    /// Concurrently re-verify stored credentials and report latency
    Verify(VerifyArgs),

    /// Clear one storage tier
    #[command(subcommand)]
    Clear(ClearCommands),

    /// Compare cold-cache and warm-cache verification latency
    Bench(BenchArgs),
}

#[derive(Subcommand)]
pub enum ClearCommands {
    /// Truncate the durable store, leaving the cache untouched
    Store,

    /// Flush the cache, leaving the durable store untouched
    Cache,
}

//! Latchkey CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use latchkey::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => latchkey::cli::commands::init::execute(args, cli.json).await,
        Commands::Register(args) => latchkey::cli::commands::register::execute(args, cli.json).await,
        Commands::Login(args) => latchkey::cli::commands::login::execute(args, cli.json).await,
        Commands::Load(args) => latchkey::cli::commands::load::execute(args, cli.json).await,
        Commands::Verify(args) => latchkey::cli::commands::verify::execute(args, cli.json).await,
        Commands::Clear(cmd) => latchkey::cli::commands::clear::execute(cmd, cli.json).await,
        Commands::Bench(args) => latchkey::cli::commands::bench::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        latchkey::cli::handle_error(err, cli.json);
    }
}

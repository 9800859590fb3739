use anyhow::Result;
use clap::Parser;

use cart_cli::cli::{Args, CliApp};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let mut app = CliApp::new(&args).map_err(|e| {
        tracing::error!("Failed to start: {}", e);
        e
    })?;

    app.run(args.command)
}

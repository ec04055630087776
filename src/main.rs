//! CLI entry point for the domino tiling generator

use clap::Parser;
use dominotile::io::cli::{Cli, TilingRunner};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> dominotile::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cli.log_level()).into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut runner = TilingRunner::new(cli);
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock()).map(|_| ())
}

//! CLI entry point for the identicon renderer

use clap::Parser;
use identicon::io::cli::{Cli, Generator};

fn main() -> identicon::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    Generator::new(cli).process()?;
    Ok(())
}

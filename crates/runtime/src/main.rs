#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sphere_runtime::app;
use sphere_runtime::cli::{Cli, Command};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Command::Simulate(args) => app::simulate(&args).map(|_| ()),
        Command::Profile(args) => app::profile(&args).map(|_| ()),
    }
}

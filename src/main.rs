/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for bcm-rs

use bcm_rs::cli::{self, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence over the default level
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    log::debug!("bcm-rs v{}", bcm_rs::VERSION);
    cli::run(cli)
}

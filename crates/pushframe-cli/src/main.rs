//! `pushframe` binary.

use std::{io, process::ExitCode};

use clap::Parser;
use pushframe_cli::{Args, EncodeConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = EncodeConfig::from(Args::parse());
    tracing::debug!(?config, "parsed configuration");

    match run(&config, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "failed to encode notification");
            ExitCode::FAILURE
        },
    }
}

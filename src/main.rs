// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;
use wavenote::cli::args::Args;
use wavenote::infrastructure::config::load_env_file;

fn main() -> Result<()> {
    // .env must be loaded before clap reads WAVENOTE_API_URL
    let env_file = load_env_file(None);

    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("wavenote={}", filter).parse()?),
        )
        .init();

    if let Err(e) = env_file {
        warn!(error = %e, "Ignoring .env file");
    }

    wavenote::run(args)
}

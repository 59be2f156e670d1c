use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use linepad_console::{load_config, Session};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "linepad",
    about = "Line-oriented text editor with undo/redo",
    version
)]
struct Cli {
    /// Load console settings from a JSON file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbosity: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_config(cli.config.as_deref()).context("failed to load console config")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the rendered view
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

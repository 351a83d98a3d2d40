use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_snake::app;
use grid_snake::config::GameConfig;
use grid_snake::error::AppError;
use grid_snake::game::GameEngine;
use grid_snake::logging::init_file_logger;
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file overriding grid size, snake length or speed settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path)?;
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    info!("starting with {config:?}, seed {:?}", cli.seed);

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::from_entropy(config),
    };
    let mut session = Session::new(engine);

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    app::run(&mut session, &mut terminal)?;

    Ok(())
}

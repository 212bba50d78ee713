//! Number baseball on the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use number_baseball::{load_config, BaseballController, GameConfig, GameView};

#[derive(Parser, Debug)]
#[command(name = "number_baseball")]
#[command(about = "Guess the hidden 3-digit number", long_about = None)]
struct Cli {
    /// Seed for the secret number generator (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Re-prompt without explaining why input was rejected.
    #[arg(long)]
    quiet_errors: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        Ok(config.with_overrides(self.seed, self.quiet_errors))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    run(config)?;
    std::process::exit(0);
}

#[instrument]
fn run(config: GameConfig) -> Result<()> {
    info!("starting game");
    let controller = BaseballController::with_seed(config.rng_seed);
    let stdin = io::stdin();
    let mut view = GameView::new(controller, stdin.lock(), io::stdout())
        .announce_invalid_input(config.announce_invalid_input);
    view.start()?;
    Ok(())
}

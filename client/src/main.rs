mod config;
mod console;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::FirstPlayerMode;
use tictactoe_common::{log, logger};

use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use console::{InputReader, run_game};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Random,
    Human,
    Computer,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Computer => FirstPlayerMode::Computer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for choosing who moves first
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Log search and turn diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: Config) -> Config {
        let mut config = config;
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(first) = self.first {
            config.first_player = first.into();
        }
        if self.verbose {
            config.log.enabled = true;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config).get_config()?;
    let config = args.apply_to(config);

    logger::init_logger(config.log.prefix.clone(), config.log.enabled);
    log!("Loaded config from {}", args.config.display());

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut out = io::stdout().lock();

    let status = run_game(&mut input, &mut out, &mut rng, config.first_player)?;
    log!("Exiting with {:?}", status);

    Ok(())
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format printed at the end of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the final score
    Score,
    /// Every round with the answer given
    Full,
    /// JSON report
    Json,
}

impl From<OutputFormat> for flagquiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Score => flagquiz_domain::OutputFormat::Score,
            OutputFormat::Full => flagquiz_domain::OutputFormat::Full,
            OutputFormat::Json => flagquiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for guess-the-flag
#[derive(Parser, Debug)]
#[command(name = "guess-the-flag")]
#[command(author, version, about = "Guess the Flag - find the right flag out of three")]
#[command(long_about = r#"
Guess the Flag shows three flags and asks you to find one country's flag.

A correct answer is worth 1 point, a wrong one costs 2. A game has a fixed
number of rounds (3 by default); after the last one you can start over.

Configuration files are loaded from (in priority order):
1. FLAGQUIZ_* environment variables (e.g. FLAGQUIZ_GAME__ROUNDS_PER_GAME=5)
2. --config <path>     Explicit config file
3. ./flagquiz.toml     Project-level config
4. ~/.config/guess-the-flag/config.toml   Global config

Example:
  guess-the-flag
  guess-the-flag --rounds 5 --seed 42
  guess-the-flag --output full --no-color
"#)]
pub struct Cli {
    /// Rounds per game (overrides the config file)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Random seed for reproducible games
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Report format printed at the end of a game
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

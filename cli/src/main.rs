//! CLI entrypoint for Guess the Flag
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use flagquiz_application::PlayGameUseCase;
use flagquiz_domain::QuizEngine;
use flagquiz_infrastructure::{ConfigLoader, FileConfig, RandRandomSource};
use flagquiz_presentation::{Cli, ConsoleProgress, OutputConfig, QuizRepl};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they stay out of the game screen
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Guess the Flag");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to load configuration")?
    };

    apply_cli_overrides(&cli, &mut config);

    if cli.show_config {
        show_config(&cli, &config)?;
        return Ok(());
    }

    let rules = config.to_rules().context("Invalid game configuration")?;
    let pool = config.to_pool().context("Invalid item pool")?;

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
    };
    output.apply_color();

    info!(
        "Pool of {} items, {} rounds per game",
        pool.len(),
        rules.rounds_per_game()
    );

    // === Dependency Injection ===
    let rng = RandRandomSource::from_seed_option(config.game.seed);
    let engine = QuizEngine::new(pool, rules, rng);
    let mut use_case = PlayGameUseCase::new(engine);

    let progress = ConsoleProgress::new(rules.rounds_per_game());
    let mut repl = QuizRepl::new()
        .context("Failed to initialize terminal input")?
        .with_output_format(output.format);

    let reports = repl.run(&mut use_case, &progress)?;
    info!("Played {} game(s)", reports.len());

    Ok(())
}

/// CLI flags take precedence over every configuration source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(rounds) = cli.rounds {
        config.game.rounds_per_game = rounds as usize;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config)");
    } else {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
    }

    println!();
    println!("Effective configuration:");
    println!("{}", ConfigLoader::to_toml(config)?);

    Ok(())
}

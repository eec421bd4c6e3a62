//! Main entry point for the team-elo command line tool
//!
//! Loads a game log, folds it into Elo ratings and prints the final
//! standings, with structured logging and configuration from file,
//! environment and flags.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use team_elo::config::AppConfig;
use team_elo::rating::RatingCalculator;
use team_elo::standings::{OutputFormat, SortOrder};
use team_elo::{load_games, EloRatingCalculator, HistoryProcessor, Standings};
use tracing::{debug, error, info};

/// Team Elo - ratings from a chronological match log
#[derive(Parser)]
#[command(
    name = "team-elo",
    version,
    about = "Compute Elo ratings for teams from a chronological log of match results",
    long_about = "team-elo reads a JSON array of games (home_team, away_team, home_score, \
                 away_score), processes them strictly in order and prints every team's final \
                 Elo rating. New teams start at 1500 and use K=40 for their first 30 games, \
                 then K=20, or K=10 once rated above 2400."
)]
struct Args {
    /// Game log (JSON array of game records)
    #[arg(value_name = "GAMES_FILE")]
    games: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with per-game logging")]
    debug: bool,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Output format (table, json)")]
    format: Option<OutputFormat>,

    /// Sort order override
    #[arg(short, long, value_name = "ORDER", help = "Sort order (asc, desc)")]
    order: Option<SortOrder>,

    /// Limit override
    #[arg(short = 'n', long, value_name = "N", help = "Only list the first N teams")]
    limit: Option<usize>,

    /// Dry run mode (validate config and input, then exit)
    #[arg(
        long,
        help = "Validate configuration and game log and exit without printing standings"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    if let Some(order) = args.order {
        config.output.order = order;
    }

    if args.limit.is_some() {
        config.output.limit = args.limit;
    }

    team_elo::config::validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let calculator = EloRatingCalculator::new(config.rating.clone())?;
    debug!("Rating configuration: {}", calculator.config());

    let records = load_games(&args.games)?;

    let mut processor = HistoryProcessor::new(Box::new(calculator));
    let summary = processor.process_raw(&records)?;

    if args.dry_run {
        info!(
            "Dry run completed - {} games and {} teams validated",
            summary.games_processed, summary.teams_created
        );
        return Ok(());
    }

    let standings = Standings::from(processor.into_registry());
    let output = match config.output.format {
        OutputFormat::Table => standings.render_table(config.output.order, config.output.limit),
        OutputFormat::Json => standings.to_json(config.output.order, config.output.limit)?,
    };
    println!("{}", output);

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("{} v{}", config.service.name, team_elo::VERSION);
    info!("   Games: {}", args.games.display());
    info!("   Initial rating: {}", config.rating.initial_rating);
    info!(
        "   Output: {} ({})",
        config.output.format, config.output.order
    );

    if let Err(e) = run(&args, config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

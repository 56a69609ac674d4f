//! CLI entry for Rodada: global flags, logging setup, opening the store and dispatching each subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::command;
use crate::internal::config::ConfigResolver;
use crate::internal::db;
use crate::internal::settings::Settings;
use crate::internal::store::SeaOrmStore;

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(about = "Rodada: round configuration for the pizza game", version)]
struct Cli {
    /// Settings file (TOML), defaults to $RODADA_CONFIG or the user config dir
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// SQLite database file, overrides the settings file
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Log resolution steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// subcommand's execute and args are defined in `command` module
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(subcommand, about = "Read or set the planned pizza count of a round")]
    Round(command::round::RoundCmds),
    #[command(subcommand, about = "Read, set or check the total round limit")]
    Limit(command::limit::LimitCmds),
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a subscriber may already be installed when called more than once in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses the command-line arguments and executes the corresponding command.
/// - `args`: parse from command line if it's `None`, otherwise parse from the given args
#[tokio::main]
pub async fn parse(args: Option<&[&str]>) -> anyhow::Result<()> {
    parse_async(args).await
}

/// `async` version of the [parse] function
pub async fn parse_async(args: Option<&[&str]>) -> anyhow::Result<()> {
    let args = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref())?;
    let db_path = args.database.unwrap_or_else(|| settings.database_path());
    tracing::debug!("using database {}", db_path.display());
    let conn = db::open_or_create(&db_path).await?;
    let resolver = ConfigResolver::new(Arc::new(SeaOrmStore::new(Arc::new(conn))));

    match args.command {
        Commands::Round(cmd) => command::round::execute(cmd, &resolver).await,
        Commands::Limit(cmd) => command::limit::execute(cmd, &resolver).await,
    }
}

/// this test is to verify that the CLI can be built without panicking
/// according [clap dock](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_4/index.html)
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}

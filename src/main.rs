//! MyStyle - terminal dress-up wardrobe
//!
//! Without a subcommand the wardrobe TUI opens. Subcommands give headless,
//! scriptable access to scanning, themes and outfit composition.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mystyle::cli::{
    CategoriesArgs, CliError, CliResult, ComposeArgs, ConfigArgs, ExitCode, ScanArgs,
    SourceArgs, ThemesArgs, ThemesCommand,
};
use mystyle::config::Config;
use mystyle::constants::{APP_BINARY_NAME, APP_NAME};
use mystyle::services::{AssetOracle, Scanner};
use mystyle::tui;

/// MyStyle - terminal dress-up wardrobe
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    source: SourceArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover which items of a category exist
    Scan(ScanArgs),
    /// List clothing categories and their layers
    Categories(CategoriesArgs),
    /// Inspect the theme manifest
    Themes(ThemesArgs),
    /// Apply items in order and show the resulting layers
    Compose(ComposeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code as i32);
}

fn run(cli: Cli) -> CliResult<()> {
    let Some(command) = cli.command else {
        return run_wardrobe(&cli.source, cli.verbose);
    };

    init_stderr_logging(cli.verbose);

    match command {
        Command::Scan(mut args) => {
            args.source.fill_from(cli.source);
            let runtime = build_runtime()?;
            args.execute(&runtime)
        }
        Command::Themes(mut args) => {
            match &mut args.command {
                ThemesCommand::List(list) => list.source.fill_from(cli.source),
                ThemesCommand::Items(items) => items.source.fill_from(cli.source),
            }
            args.execute()
        }
        Command::Categories(args) => {
            reject_source_flags(&cli.source, "categories")?;
            args.execute()
        }
        Command::Compose(args) => {
            reject_source_flags(&cli.source, "compose")?;
            args.execute()
        }
        Command::Config(args) => {
            reject_source_flags(&cli.source, "config")?;
            args.execute()
        }
    }
}

/// Fails when source flags precede a subcommand that has no use for them.
fn reject_source_flags(source: &SourceArgs, command: &str) -> CliResult<()> {
    if source.is_empty() {
        return Ok(());
    }
    Err(CliError::validation(format!(
        "--root, --base-url and --manifest are not used by `{command}`.\n\nUse `{APP_BINARY_NAME} config set` to change the saved asset source."
    )))
}

fn build_runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))
}

/// Logs to stderr for headless commands. Warnings only unless verbose.
fn init_stderr_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to a file while the TUI owns the terminal.
fn init_file_logging(verbose: bool) -> Result<()> {
    let path = Config::log_file_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run_wardrobe(source: &SourceArgs, verbose: bool) -> CliResult<()> {
    let config = source.resolve_config()?;

    if let Err(e) = init_file_logging(verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let catalog = config.load_themes().map_err(|e| {
        CliError::validation(format!(
            "Failed to load theme manifest: {e:#}\n\nFix the file or point {APP_BINARY_NAME} at another one with --manifest."
        ))
    })?;
    let asset_source = config
        .asset_source()
        .map_err(|e| CliError::io(format!("{e:#}")))?;
    let oracle = AssetOracle::from_source(&asset_source)
        .map_err(|e| CliError::io(format!("Failed to set up asset source: {e:#}")))?;

    info!(
        source = %asset_source,
        themes = catalog.len(),
        "starting {} v{}",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let runtime = build_runtime()?;
    let scanner = Scanner::new(oracle, config.scan_settings());
    let mut state = tui::AppState::new(&config, catalog, scanner, runtime.handle().clone());

    let mut terminal =
        tui::setup_terminal().map_err(|e| CliError::io(format!("{e:#}")))?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal).map_err(|e| CliError::io(format!("{e:#}")))?;

    result.map_err(|e| CliError::io(format!("{e:#}")))
}

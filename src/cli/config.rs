//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::Category;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Local site root containing the asset directory
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    root: Option<PathBuf>,

    /// Static file host probed with HTTP HEAD
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Theme manifest JSON file
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Directory below the root holding category folders
    #[arg(long, value_name = "PATH")]
    base_path: Option<String>,

    /// Highest serial probed per category
    #[arg(long, value_name = "N")]
    max_search_limit: Option<u32>,

    /// Category shown when the wardrobe opens
    #[arg(long, value_name = "CATEGORY")]
    start_category: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    assets: AssetsOutput,
    scan: ScanOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct AssetsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<String>,
}

#[derive(Serialize, Debug)]
struct ScanOutput {
    max_search_limit: u32,
    serial_padding: usize,
    extension: String,
    yield_interval: u32,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    start_category: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.root.is_none()
            && self.base_url.is_none()
            && self.manifest.is_none()
            && self.base_path.is_none()
            && self.max_search_limit.is_none()
            && self.start_category.is_none()
            && self.theme.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --root, --base-url, --manifest, --base-path, --max-search-limit, --start-category, or --theme",
            ));
        }

        let mut config = Config::read()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(manifest) = &self.manifest {
            if !manifest.is_file() {
                return Err(CliError::validation(format!(
                    "Theme manifest does not exist: {}",
                    manifest.display()
                )));
            }
        }
        config.apply_overrides(
            self.root.clone(),
            self.base_url.clone(),
            self.manifest.clone(),
        );

        if let Some(base_path) = &self.base_path {
            config.assets.base_path.clone_from(base_path);
        }

        if let Some(limit) = self.max_search_limit {
            config.scan.max_search_limit = limit;
        }

        if let Some(category) = &self.start_category {
            config.ui.start_category = category
                .parse::<Category>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = theme_str
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        config.validate().map_err(|e| {
            CliError::validation(format!(
                "{e:#}\n\nConfiguration left unchanged. Fix the value with `config set`."
            ))
        })?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        assets: AssetsOutput {
            root: config
                .assets
                .root
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            base_url: config.assets.base_url.clone(),
            base_path: config.assets.base_path.clone(),
            manifest: config
                .assets
                .manifest
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        scan: ScanOutput {
            max_search_limit: config.scan.max_search_limit,
            serial_padding: config.scan.serial_padding,
            extension: config.scan.extension.clone(),
            yield_interval: config.scan.yield_interval,
        },
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
            start_category: config.ui.start_category.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let or_unset = |value: Option<String>| value.unwrap_or_else(|| "(not set)".to_string());

    println!("Assets:");
    println!(
        "  Root:             {}",
        or_unset(config.assets.root.as_ref().map(|p| p.display().to_string()))
    );
    println!("  Base URL:         {}", or_unset(config.assets.base_url.clone()));
    println!("  Base path:        {}", config.assets.base_path);
    println!(
        "  Theme manifest:   {}",
        or_unset(
            config
                .assets
                .manifest
                .as_ref()
                .map(|p| p.display().to_string())
        )
    );
    println!();
    println!("Scan:");
    println!("  Max search limit: {}", config.scan.max_search_limit);
    println!("  Serial padding:   {}", config.scan.serial_padding);
    println!("  Extension:        {}", config.scan.extension);
    println!();
    println!("UI:");
    println!("  Theme:            {:?}", config.ui.theme_mode);
    println!("  Start category:   {}", config.ui.start_category);
}

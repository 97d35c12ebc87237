//! Shared CLI plumbing: error type, exit codes and asset source flags.

use crate::config::Config;
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes used by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input (unknown category, bad flag value, malformed manifest)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        self.code
    }

    /// Error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Flags selecting where assets and themes come from.
///
/// They override `config.toml` for a single invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Local site root containing the asset directory
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    pub root: Option<PathBuf>,

    /// Static file host to probe with HTTP HEAD requests
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Theme manifest JSON file
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

impl SourceArgs {
    /// True when no flag was given.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none() && self.base_url.is_none() && self.manifest.is_none()
    }

    /// Takes flags given before the subcommand name.
    ///
    /// Flags given after the subcommand name win. The asset location is
    /// taken as a whole so `--root` and `--base-url` never both end up set.
    pub fn fill_from(&mut self, outer: SourceArgs) {
        if self.root.is_none() && self.base_url.is_none() {
            self.root = outer.root;
            self.base_url = outer.base_url;
        }
        if self.manifest.is_none() {
            self.manifest = outer.manifest;
        }
    }

    /// Loads the configuration and applies these flags on top.
    ///
    /// The file is validated only after the flags are applied, so a flag
    /// can stand in for a stale value such as a deleted root directory.
    pub fn resolve_config(&self) -> CliResult<Config> {
        let mut config = Config::read()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        config.apply_overrides(
            self.root.clone(),
            self.base_url.clone(),
            self.manifest.clone(),
        );
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;
        Ok(config)
    }
}

/// Prints `value` as a single JSON line.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

//! CLI command handlers for MyStyle.
//!
//! This module provides headless, scriptable access to asset discovery,
//! theme filtering and outfit composition for automation and testing.

pub mod categories;
pub mod common;
pub mod compose;
pub mod config;
pub mod scan;
pub mod themes;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode, SourceArgs};
pub use compose::ComposeArgs;
pub use config::ConfigArgs;
pub use scan::ScanArgs;
pub use themes::{ThemesArgs, ThemesCommand};

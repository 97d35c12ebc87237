//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default asset discovery settings.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MyStyle";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "mystyle";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "MyStyle";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "MYSTYLE_CONFIG_DIR";

/// Default directory (relative to the asset root) holding per-category folders.
pub const DEFAULT_BASE_PATH: &str = "assets/character";

/// Highest serial the scanner will probe.
pub const DEFAULT_MAX_SEARCH_LIMIT: u32 = 100;

/// Width of the zero-padded serial in item filenames (`hair_001.png`).
pub const DEFAULT_SERIAL_PADDING: usize = 3;

/// File extension of item images, without the dot.
pub const DEFAULT_ITEM_EXTENSION: &str = "png";

/// Number of probes between cooperative yields to the runtime.
pub const DEFAULT_YIELD_INTERVAL: u32 = 20;

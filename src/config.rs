//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_BASE_PATH, DEFAULT_ITEM_EXTENSION,
    DEFAULT_MAX_SEARCH_LIMIT, DEFAULT_SERIAL_PADDING, DEFAULT_YIELD_INTERVAL,
};
use crate::models::{AssetLayout, Category, ThemeCatalog};
use crate::parser;
use crate::services::{AssetSource, ScanSettings};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}'. Expected auto, dark, or light"),
        }
    }
}

/// Where item assets and the theme manifest live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Local site root checked by the filesystem oracle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Static file host checked with HTTP HEAD (takes precedence over `root`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Directory below the root holding one folder per category
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Curated theme manifest (JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: None,
            base_url: None,
            base_path: default_base_path(),
            manifest: None,
        }
    }
}

/// Asset discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Highest serial probed per category
    #[serde(default = "default_max_search_limit")]
    pub max_search_limit: u32,
    /// Serial width in item filenames
    #[serde(default = "default_serial_padding")]
    pub serial_padding: usize,
    /// Item image extension without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Probes between cooperative yields
    #[serde(default = "default_yield_interval")]
    pub yield_interval: u32,
}

const fn default_max_search_limit() -> u32 {
    DEFAULT_MAX_SEARCH_LIMIT
}

const fn default_serial_padding() -> usize {
    DEFAULT_SERIAL_PADDING
}

fn default_extension() -> String {
    DEFAULT_ITEM_EXTENSION.to_string()
}

const fn default_yield_interval() -> u32 {
    DEFAULT_YIELD_INTERVAL
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_search_limit: default_max_search_limit(),
            serial_padding: default_serial_padding(),
            extension: default_extension(),
            yield_interval: default_yield_interval(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Category shown when the wardrobe opens
    #[serde(default)]
    pub start_category: Category,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MyStyle/config.toml`
/// - macOS: `~/Library/Application Support/MyStyle/config.toml`
/// - Windows: `%APPDATA%\MyStyle\config.toml`
///
/// `MYSTYLE_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `max_search_limit` must be 1-999
/// - `serial_padding` must be 1-6
/// - `extension` must be non-empty and contain no dot
/// - `base_path` must be non-empty
/// - `base_url` must be an http(s) URL
/// - `root` must exist if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Asset locations
    #[serde(default)]
    pub assets: AssetConfig,
    /// Discovery settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/MyStyle/`
    /// - macOS: `~/Library/Application Support/MyStyle/`
    /// - Windows: `%APPDATA%\MyStyle\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the wardrobe log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("mystyle.log"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config = Self::read()?;

        config.validate().context(format!(
            "Invalid config file: {}",
            Self::config_file_path()?.display()
        ))?;

        Ok(config)
    }

    /// Reads the config file without validating it.
    ///
    /// Used when the caller is about to change values and validates the
    /// result itself, so a stale entry (such as a deleted root directory)
    /// can be fixed without losing the rest of the file.
    pub fn read() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(1..=999).contains(&self.scan.max_search_limit) {
            anyhow::bail!(
                "max_search_limit must be between 1 and 999 (got {})",
                self.scan.max_search_limit
            );
        }

        if !(1..=6).contains(&self.scan.serial_padding) {
            anyhow::bail!(
                "serial_padding must be between 1 and 6 (got {})",
                self.scan.serial_padding
            );
        }

        let ext = &self.scan.extension;
        if ext.is_empty() || ext.contains('.') || ext.contains('/') {
            anyhow::bail!("extension must be a bare file extension like 'png' (got '{ext}')");
        }

        if self.assets.base_path.trim().is_empty() {
            anyhow::bail!("base_path cannot be empty");
        }

        if let Some(url) = &self.assets.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("base_url must start with http:// or https:// (got '{url}')");
            }
        }

        if let Some(root) = &self.assets.root {
            if !root.is_dir() {
                anyhow::bail!("Asset root directory does not exist: {}", root.display());
            }
        }

        Ok(())
    }

    /// Applies per-invocation overrides (command-line flags).
    ///
    /// A root override drops any configured base URL and vice versa, so the
    /// flag given on the command line always decides the source.
    pub fn apply_overrides(
        &mut self,
        root: Option<PathBuf>,
        base_url: Option<String>,
        manifest: Option<PathBuf>,
    ) {
        if let Some(root) = root {
            self.assets.root = Some(root);
            self.assets.base_url = None;
        }
        if let Some(url) = base_url {
            self.assets.base_url = Some(url);
            self.assets.root = None;
        }
        if let Some(manifest) = manifest {
            self.assets.manifest = Some(manifest);
        }
    }

    /// Resolves where assets are checked.
    ///
    /// The base URL wins over the root; with neither set, the current
    /// directory is the root.
    pub fn asset_source(&self) -> Result<AssetSource> {
        if let Some(url) = &self.assets.base_url {
            return Ok(AssetSource::Http(url.clone()));
        }
        let root = match &self.assets.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        Ok(AssetSource::Directory(root))
    }

    /// The asset path convention.
    #[must_use]
    pub fn asset_layout(&self) -> AssetLayout {
        AssetLayout {
            base_path: self.assets.base_path.clone(),
            serial_padding: self.scan.serial_padding,
            extension: self.scan.extension.clone(),
        }
    }

    /// Scanner settings derived from this config.
    #[must_use]
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            layout: self.asset_layout(),
            max_search_limit: self.scan.max_search_limit,
            yield_interval: self.scan.yield_interval,
        }
    }

    /// Loads the theme manifest, or an empty catalog if none is configured.
    pub fn load_themes(&self) -> Result<ThemeCatalog> {
        match &self.assets.manifest {
            Some(path) => parser::parse_theme_manifest(path),
            None => Ok(ThemeCatalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.assets.base_path, "assets/character");
        assert_eq!(config.scan.max_search_limit, 100);
        assert_eq!(config.scan.serial_padding, 3);
        assert_eq!(config.scan.extension, "png");
        assert_eq!(config.scan.yield_interval, 20);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.start_category, Category::Hair);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_ranges() {
        let mut config = Config::new();
        config.scan.max_search_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.scan.serial_padding = 7;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.scan.extension = ".png".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.assets.base_url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.assets.root = Some(PathBuf::from("/nonexistent/mystyle/root"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [assets]
            base_url = "http://localhost:8000"

            [ui]
            start_category = "cloth-2"
            "#,
        )
        .unwrap();
        assert_eq!(config.assets.base_path, "assets/character");
        assert_eq!(config.scan, ScanConfig::default());
        assert_eq!(config.ui.start_category, Category::Bottom);
        assert_eq!(
            config.asset_source().unwrap(),
            AssetSource::Http("http://localhost:8000".to_string())
        );
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.assets.root = Some(temp_dir.path().to_path_buf());
        config.scan.max_search_limit = 40;
        config.ui.theme_mode = ThemeMode::Light;

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overrides_pick_one_source() {
        let mut config = Config::new();
        config.assets.base_url = Some("http://localhost:8000".to_string());
        config.apply_overrides(Some(PathBuf::from("/srv/site")), None, None);
        assert_eq!(
            config.asset_source().unwrap(),
            AssetSource::Directory(PathBuf::from("/srv/site"))
        );

        config.apply_overrides(None, Some("https://cdn.example".to_string()), None);
        assert_eq!(config.assets.root, None);
    }

    #[test]
    fn test_scan_settings_follow_config() {
        let mut config = Config::new();
        config.scan.serial_padding = 2;
        config.assets.base_path = "img".to_string();
        let settings = config.scan_settings();
        assert_eq!(settings.layout.base_path, "img");
        assert_eq!(settings.layout.serial_padding, 2);
        assert_eq!(settings.max_search_limit, 100);
    }

    #[test]
    fn test_load_themes_without_manifest() {
        assert!(Config::new().load_themes().unwrap().is_empty());
    }
}

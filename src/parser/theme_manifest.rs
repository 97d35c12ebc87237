//! Theme manifest parsing.
//!
//! The manifest is a JSON array of curated outfits:
//!
//! ```json
//! [
//!   { "name": "Spring", "thumb": "assets/themes/spring.png",
//!     "items": ["dress_001.png", "hair_003.png"] }
//! ]
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{Category, Theme, ThemeCatalog};

/// Parses a theme manifest from a JSON string.
pub fn parse_theme_manifest_str(content: &str) -> Result<ThemeCatalog> {
    let themes: Vec<Theme> =
        serde_json::from_str(content).context("Failed to parse theme manifest JSON")?;

    for theme in &themes {
        if theme.name.trim().is_empty() {
            anyhow::bail!("Theme manifest contains a theme with an empty name");
        }
        for item in &theme.items {
            if attributed_category(item).is_none() {
                // Not an error: such items are simply never shown.
                warn!(
                    theme = %theme.name,
                    item = %item,
                    "theme item does not start with a known category prefix"
                );
            }
        }
    }

    debug!(count = themes.len(), "loaded theme manifest");
    Ok(ThemeCatalog::new(themes))
}

/// Reads and parses a theme manifest file.
///
/// # Arguments
///
/// * `path` - Path to the manifest JSON file
///
/// # Returns
///
/// The ordered theme catalog
pub fn parse_theme_manifest(path: &Path) -> Result<ThemeCatalog> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read theme manifest: {}", path.display()))?;

    parse_theme_manifest_str(&content)
        .context(format!("Invalid theme manifest: {}", path.display()))
}

/// Returns the category an item filename is attributed to by its prefix.
///
/// Longer identifiers are tried first so `hair-band_001.png` is not
/// mistaken for a hair item.
pub fn attributed_category(file_name: &str) -> Option<Category> {
    let lower = file_name.to_ascii_lowercase();
    let mut categories = Category::ALL;
    categories.sort_by_key(|c| std::cmp::Reverse(c.as_str().len()));
    categories
        .into_iter()
        .find(|c| lower.starts_with(&c.file_prefix()))
}

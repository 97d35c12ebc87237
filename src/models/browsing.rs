//! Browsing state: which category, mode and theme the user is looking at.

use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the item grid is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowseMode {
    /// Every numbered item discovered by scanning
    #[default]
    All,
    /// Only the items of the selected theme
    Theme,
}

impl BrowseMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Theme,
            Self::Theme => Self::All,
        }
    }

    /// Lowercase identifier (`all` or `theme`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for BrowseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowseMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "theme" => Ok(Self::Theme),
            other => anyhow::bail!("Unknown mode '{other}'. Expected 'all' or 'theme'"),
        }
    }
}

/// Navigation state for the lifetime of a session.
///
/// Only the wardrobe controller mutates it; it is never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowsingState {
    /// Category whose items are displayed
    pub category: Category,
    /// Active browsing mode
    pub mode: BrowseMode,
    /// Selected theme, always within the catalog bounds (0 when empty)
    pub theme_index: usize,
}

impl BrowsingState {
    /// Creates a state starting on `category` in `all` mode.
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            mode: BrowseMode::All,
            theme_index: 0,
        }
    }
}

//! Item references and the asset path convention.

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_ITEM_EXTENSION, DEFAULT_SERIAL_PADDING};
use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How item images are laid out under the asset root.
///
/// Items live at `<base_path>/<category>/<category>_<serial>.<extension>`,
/// with the serial zero-padded to `serial_padding` digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLayout {
    /// Directory holding one folder per category (e.g. "assets/character")
    pub base_path: String,
    /// Serial width in digits
    pub serial_padding: usize,
    /// Image extension without the dot
    pub extension: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            serial_padding: DEFAULT_SERIAL_PADDING,
            extension: DEFAULT_ITEM_EXTENSION.to_string(),
        }
    }
}

impl AssetLayout {
    /// Joins the base path, the category folder and a filename.
    #[must_use]
    pub fn join(&self, category: Category, file_name: &str) -> ItemPath {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            ItemPath(format!("{category}/{file_name}"))
        } else {
            ItemPath(format!("{base}/{category}/{file_name}"))
        }
    }

    /// Builds the generated filename for a serial (`hair_007.png`).
    #[must_use]
    pub fn file_name(&self, category: Category, serial: u32) -> String {
        format!(
            "{}_{:0width$}.{}",
            category,
            serial,
            self.extension,
            width = self.serial_padding
        )
    }
}

/// A generated reference to one numbered item of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    /// Category the item belongs to
    pub category: Category,
    /// 1-based serial number
    pub serial: u32,
}

impl ItemRef {
    /// Creates a new item reference.
    #[must_use]
    pub const fn new(category: Category, serial: u32) -> Self {
        Self { category, serial }
    }

    /// Resolves the reference into a path under the given layout.
    #[must_use]
    pub fn path(&self, layout: &AssetLayout) -> ItemPath {
        layout.join(self.category, &layout.file_name(self.category, self.serial))
    }
}

/// Relative resource path of an item image (e.g. "assets/character/hair/hair_001.png").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemPath(String);

impl ItemPath {
    /// Wraps an existing path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the final path component (the filename).
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

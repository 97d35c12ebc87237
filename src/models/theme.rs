//! Curated outfit themes.

use serde::{Deserialize, Serialize};

/// A named, curated outfit bundle from the theme manifest.
///
/// Items are bare filenames; their category is implied by the
/// `<category>_` prefix rather than stored explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name (e.g. "Spring Picnic")
    pub name: String,
    /// Thumbnail image path shown in the carousel
    pub thumb: String,
    /// Item filenames in display order
    #[serde(default)]
    pub items: Vec<String>,
}

/// Ordered, immutable list of themes loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Creates a catalog from an ordered list of themes.
    #[must_use]
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    /// Number of themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if the catalog has no themes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Returns the theme at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// Iterates over all themes in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Wraps `index + direction` into `0..len`.
    ///
    /// Negative results wrap from the end, so moving back from 0 lands on
    /// the last theme. An empty catalog always yields 0.
    #[must_use]
    pub fn wrap_index(&self, index: usize, direction: isize) -> usize {
        let count = self.themes.len();
        if count == 0 {
            return 0;
        }
        let moved = (index % count) as isize + direction % count as isize;
        moved.rem_euclid(count as isize) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> ThemeCatalog {
        ThemeCatalog::new(
            (0..n)
                .map(|i| Theme {
                    name: format!("Theme {i}"),
                    thumb: format!("thumbs/{i}.png"),
                    items: Vec::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_wrap_backwards_from_zero() {
        assert_eq!(catalog(5).wrap_index(0, -1), 4);
    }

    #[test]
    fn test_wrap_forwards_past_end() {
        assert_eq!(catalog(5).wrap_index(4, 1), 0);
        assert_eq!(catalog(5).wrap_index(2, 1), 3);
    }

    #[test]
    fn test_wrap_large_steps() {
        assert_eq!(catalog(5).wrap_index(1, -12), 4);
        assert_eq!(catalog(3).wrap_index(0, 7), 1);
    }

    #[test]
    fn test_wrap_empty_catalog() {
        assert_eq!(catalog(0).wrap_index(0, -1), 0);
        assert_eq!(catalog(0).wrap_index(3, 2), 0);
    }

    #[test]
    fn test_items_default_to_empty() {
        let theme: Theme = serde_json::from_str(r#"{"name":"Bare","thumb":"t.png"}"#).unwrap();
        assert!(theme.items.is_empty());
    }
}

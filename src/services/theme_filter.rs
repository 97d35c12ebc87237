//! Theme-mode item selection.

use crate::models::{AssetLayout, Category, ItemPath, Theme};

/// Returns the items of `theme` that belong to `category`.
///
/// An item belongs to a category when its filename starts with
/// `<category>_`, compared case-insensitively. Manifest order is kept and no
/// existence check is made. With no theme selected the result is empty.
pub fn filter_theme(
    theme: Option<&Theme>,
    category: Category,
    layout: &AssetLayout,
) -> Vec<ItemPath> {
    let Some(theme) = theme else {
        return Vec::new();
    };

    let prefix = category.file_prefix();
    theme
        .items
        .iter()
        .filter(|item| item.to_ascii_lowercase().starts_with(&prefix))
        .map(|item| layout.join(category, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(items: &[&str]) -> Theme {
        Theme {
            name: "Test".to_string(),
            thumb: "thumb.png".to_string(),
            items: items.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_dress() {
        let theme = theme(&["dress_001.png", "eyes_002.png"]);
        let items = filter_theme(Some(&theme), Category::Dress, &AssetLayout::default());
        assert_eq!(
            items,
            vec![ItemPath::new("assets/character/dress/dress_001.png")]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_filename() {
        let theme = theme(&["Hair_010.PNG", "hair_002.png", "hairpin.png"]);
        let items = filter_theme(Some(&theme), Category::Hair, &AssetLayout::default());
        assert_eq!(
            items,
            vec![
                ItemPath::new("assets/character/hair/Hair_010.PNG"),
                ItemPath::new("assets/character/hair/hair_002.png"),
            ]
        );
    }

    #[test]
    fn test_hair_does_not_match_hair_band() {
        let theme = theme(&["hair-band_001.png", "hair_001.png"]);
        let hair = filter_theme(Some(&theme), Category::Hair, &AssetLayout::default());
        let band = filter_theme(Some(&theme), Category::HairBand, &AssetLayout::default());
        assert_eq!(hair.len(), 1);
        assert_eq!(band.len(), 1);
        assert_eq!(band[0].file_name(), "hair-band_001.png");
    }

    #[test]
    fn test_no_theme_selected() {
        assert!(filter_theme(None, Category::Dress, &AssetLayout::default()).is_empty());
    }
}

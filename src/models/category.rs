//! Wearable categories and their character layer slots.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A wearable slot type.
///
/// The set is closed: each variant owns exactly one layer slot on the
/// character preview. Identifiers are kebab-case and double as the asset
/// folder name and the filename prefix (`cloth-1/cloth-1_004.png`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Hairstyles
    #[default]
    Hair,
    /// Eye shapes and colors
    Eyes,
    /// Full one-piece dresses
    Dress,
    /// Separate top garment
    #[serde(rename = "cloth-1")]
    Top,
    /// Separate bottom garment
    #[serde(rename = "cloth-2")]
    Bottom,
    /// Footwear
    Shoes,
    /// Necklaces
    Necklace,
    /// Hair bands and ribbons
    HairBand,
}

/// Visual layer slot a category is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerSlot {
    /// Element id of the slot (`layer-<category>`)
    pub id: &'static str,
    /// Stacking order, higher is drawn on top
    pub z_order: u8,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Hair,
        Self::Eyes,
        Self::Dress,
        Self::Top,
        Self::Bottom,
        Self::Shoes,
        Self::Necklace,
        Self::HairBand,
    ];

    /// Returns the kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Eyes => "eyes",
            Self::Dress => "dress",
            Self::Top => "cloth-1",
            Self::Bottom => "cloth-2",
            Self::Shoes => "shoes",
            Self::Necklace => "necklace",
            Self::HairBand => "hair-band",
        }
    }

    /// Human-readable label for menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hair => "Hair",
            Self::Eyes => "Eyes",
            Self::Dress => "Dress",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Shoes => "Shoes",
            Self::Necklace => "Necklace",
            Self::HairBand => "Hair Band",
        }
    }

    /// Returns the layer slot this category is drawn into.
    ///
    /// Z-order runs body outwards: eyes under hair, garments under
    /// accessories, hair band on top of hair.
    #[must_use]
    pub const fn layer_slot(self) -> LayerSlot {
        let (id, z_order) = match self {
            Self::Eyes => ("layer-eyes", 10),
            Self::Shoes => ("layer-shoes", 20),
            Self::Bottom => ("layer-cloth-2", 30),
            Self::Top => ("layer-cloth-1", 40),
            Self::Dress => ("layer-dress", 50),
            Self::Necklace => ("layer-necklace", 60),
            Self::Hair => ("layer-hair", 70),
            Self::HairBand => ("layer-hair-band", 80),
        };
        LayerSlot { id, z_order }
    }

    /// Categories that are taken off when this one is worn.
    ///
    /// A dress and the separates (top/bottom) cannot be worn together.
    #[must_use]
    pub const fn excludes(self) -> &'static [Self] {
        match self {
            Self::Dress => &[Self::Top, Self::Bottom],
            Self::Top | Self::Bottom => &[Self::Dress],
            _ => &[],
        }
    }

    /// Filename prefix shared by every item of this category (`hair_`).
    #[must_use]
    pub fn file_prefix(self) -> String {
        format!("{}_", self.as_str())
    }

    /// Returns the category after this one, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the category before this one, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown category '{s}'. Expected one of: {}",
                    known.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_round_trips_identifiers() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!("Cloth-1".parse::<Category>().unwrap(), Category::Top);
        assert_eq!(" hair-band ".parse::<Category>().unwrap(), Category::HairBand);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hat".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'hat'"));
    }

    #[test]
    fn test_every_category_has_its_own_slot() {
        let ids: HashSet<_> = Category::ALL.iter().map(|c| c.layer_slot().id).collect();
        let orders: HashSet<_> = Category::ALL
            .iter()
            .map(|c| c.layer_slot().z_order)
            .collect();
        assert_eq!(ids.len(), Category::ALL.len());
        assert_eq!(orders.len(), Category::ALL.len());
        assert_eq!(Category::Top.layer_slot().id, "layer-cloth-1");
    }

    #[test]
    fn test_exclusions_are_symmetric() {
        for category in Category::ALL {
            for other in category.excludes() {
                assert!(other.excludes().contains(&category));
            }
        }
        assert!(Category::Shoes.excludes().is_empty());
        assert!(!Category::Top.excludes().contains(&Category::Bottom));
    }

    #[test]
    fn test_serde_uses_kebab_identifiers() {
        let json = serde_json::to_string(&Category::Bottom).unwrap();
        assert_eq!(json, "\"cloth-2\"");
        let parsed: Category = serde_json::from_str("\"hair-band\"").unwrap();
        assert_eq!(parsed, Category::HairBand);
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Category::HairBand.next(), Category::Hair);
        assert_eq!(Category::Hair.previous(), Category::HairBand);
        assert_eq!(Category::Dress.next(), Category::Top);
    }
}

//! Parsing for the file formats the wardrobe reads.
//!
//! Currently this is only the curated theme manifest (JSON).

pub mod theme_manifest;

// Re-export commonly used functions
pub use theme_manifest::{attributed_category, parse_theme_manifest, parse_theme_manifest_str};

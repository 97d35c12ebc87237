//! Data models for categories, items, themes and the character layer stack.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod browsing;
pub mod category;
pub mod item;
pub mod layer_stack;
pub mod theme;

// Re-export all model types
pub use browsing::{BrowseMode, BrowsingState};
pub use category::{Category, LayerSlot};
pub use item::{AssetLayout, ItemPath, ItemRef};
pub use layer_stack::LayerStack;
pub use theme::{Theme, ThemeCatalog};

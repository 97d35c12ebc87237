//! Character layer stack: what is currently worn in each slot.

use crate::models::{Category, ItemPath};
use anyhow::Result;
use std::collections::BTreeMap;

/// Per-category layer assignments of the character preview.
///
/// # Validation
///
/// - Each category appears at most once (one slot per category)
/// - Categories without a slot are simply absent; applying to them is a no-op
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack {
    slots: BTreeMap<Category, Option<ItemPath>>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::full()
    }
}

impl LayerStack {
    /// Creates a stack with the given slots, all empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a category is listed twice.
    pub fn new(categories: &[Category]) -> Result<Self> {
        let mut slots = BTreeMap::new();
        for &category in categories {
            if slots.insert(category, None).is_some() {
                anyhow::bail!(
                    "Category '{category}' is mapped to more than one layer slot ({})",
                    category.layer_slot().id
                );
            }
        }
        Ok(Self { slots })
    }

    /// Creates a stack with a slot for every category.
    #[must_use]
    pub fn full() -> Self {
        Self {
            slots: Category::ALL.iter().map(|&c| (c, None)).collect(),
        }
    }

    /// Returns true if the stack has a slot for `category`.
    #[must_use]
    pub fn has_slot(&self, category: Category) -> bool {
        self.slots.contains_key(&category)
    }

    /// Returns the item worn in `category`, if any.
    #[must_use]
    pub fn worn(&self, category: Category) -> Option<&ItemPath> {
        self.slots.get(&category).and_then(Option::as_ref)
    }

    /// Sets or clears a slot. Returns false if there is no such slot.
    pub fn set(&mut self, category: Category, path: Option<ItemPath>) -> bool {
        match self.slots.get_mut(&category) {
            Some(slot) => {
                *slot = path;
                true
            }
            None => false,
        }
    }

    /// Slots in drawing order (lowest z-order first).
    #[must_use]
    pub fn in_z_order(&self) -> Vec<(Category, Option<&ItemPath>)> {
        let mut layers: Vec<_> = self
            .slots
            .iter()
            .map(|(&category, path)| (category, path.as_ref()))
            .collect();
        layers.sort_by_key(|(category, _)| category.layer_slot().z_order);
        layers
    }

    /// Number of slots currently holding an item.
    #[must_use]
    pub fn worn_count(&self) -> usize {
        self.slots.values().filter(|p| p.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slot_rejected() {
        let err = LayerStack::new(&[Category::Hair, Category::Eyes, Category::Hair]).unwrap_err();
        assert!(err.to_string().contains("'hair'"));
    }

    #[test]
    fn test_set_missing_slot() {
        let mut stack = LayerStack::new(&[Category::Hair]).unwrap();
        assert!(!stack.set(Category::Shoes, Some(ItemPath::new("x.png"))));
        assert!(!stack.has_slot(Category::Shoes));
        assert!(stack.set(Category::Hair, Some(ItemPath::new("h.png"))));
        assert_eq!(stack.worn(Category::Hair).unwrap().as_str(), "h.png");
        assert_eq!(stack.worn_count(), 1);
    }

    #[test]
    fn test_z_order() {
        let stack = LayerStack::full();
        let order: Vec<Category> = stack.in_z_order().into_iter().map(|(c, _)| c).collect();
        assert_eq!(order.first(), Some(&Category::Eyes));
        assert_eq!(order.last(), Some(&Category::HairBand));
        assert_eq!(order.len(), Category::ALL.len());
    }
}

//! Layer compositor: wearing and removing items on the character.

use tracing::debug;

use crate::models::{Category, ItemPath, LayerStack};

/// Receives every change to a character layer.
///
/// The presentation layer implements this to mirror the stack onto whatever
/// it draws; `None` means the slot is now empty.
pub trait LayerSink {
    /// Called after the slot of `category` changed.
    fn layer_changed(&mut self, category: Category, path: Option<&ItemPath>);
}

/// Sink that ignores all changes.
impl LayerSink for () {
    fn layer_changed(&mut self, _category: Category, _path: Option<&ItemPath>) {}
}

/// Result of [`Compositor::apply_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No slot exists for the category; nothing changed
    Ignored,
    /// The item was already worn and has been taken off
    Removed,
    /// The item is now worn
    Worn,
}

/// Owns the layer stack and enforces the dress/separates exclusion.
#[derive(Debug)]
pub struct Compositor<S> {
    stack: LayerStack,
    sink: S,
}

impl<S: LayerSink> Compositor<S> {
    /// Creates a compositor over `stack`, mirroring changes to `sink`.
    pub fn new(stack: LayerStack, sink: S) -> Self {
        Self { stack, sink }
    }

    /// Returns the current layer stack.
    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// Returns the layer sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Toggles `path` in the slot of `category`.
    ///
    /// Selecting the item already worn takes it off. Selecting anything else
    /// puts it on; putting on a dress takes off both separates, and putting on
    /// a separate takes off the dress.
    pub fn apply_item(&mut self, category: Category, path: &ItemPath) -> ApplyOutcome {
        if !self.stack.has_slot(category) {
            debug!(%category, "no layer slot for category, ignoring");
            return ApplyOutcome::Ignored;
        }

        if self.stack.worn(category) == Some(path) {
            self.set(category, None);
            debug!(%category, path = %path, "item removed");
            return ApplyOutcome::Removed;
        }

        self.set(category, Some(path.clone()));
        for &other in category.excludes() {
            self.set(other, None);
        }
        debug!(%category, path = %path, "item worn");
        ApplyOutcome::Worn
    }

    fn set(&mut self, category: Category, path: Option<ItemPath>) {
        if self.stack.set(category, path) {
            self.sink.layer_changed(category, self.stack.worn(category));
        }
    }
}

//! Wardrobe controller.
//!
//! The controller owns the browsing state and is the only place it changes.
//! Every navigation action re-evaluates the item list for the current
//! category: theme mode filters the manifest right away, all mode asks for a
//! scan and renders its result later through [`Controller::complete_scan`].

use tracing::debug;

use crate::models::{
    AssetLayout, BrowseMode, BrowsingState, Category, ItemPath, Theme, ThemeCatalog,
};
use crate::services::compositor::{ApplyOutcome, Compositor, LayerSink};
use crate::services::theme_filter::filter_theme;

/// Displays item lists and the theme carousel.
pub trait Renderer {
    /// A scan for `category` has started.
    fn show_loading(&mut self, category: Category);

    /// Shows the items of `category`. An empty slice shows the "no items" placeholder.
    fn render_items(&mut self, category: Category, items: &[ItemPath]);

    /// Shows the selected theme (`None` when the catalog is empty).
    fn render_theme(&mut self, theme: Option<&Theme>, index: usize, count: usize);
}

/// Identifies one requested scan.
///
/// Only the most recently issued ticket may render its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket {
    /// Monotonic refresh counter at the time of the request
    pub generation: u64,
    /// Category to scan
    pub category: Category,
}

/// What a state change requires from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Items were rendered synchronously
    Rendered,
    /// A scan must be run and handed back via [`Controller::complete_scan`]
    Scan(ScanTicket),
}

/// Single owner of the browsing state, the theme catalog and the outfit.
pub struct Controller<R, S> {
    state: BrowsingState,
    catalog: ThemeCatalog,
    layout: AssetLayout,
    renderer: R,
    compositor: Compositor<S>,
    generation: u64,
    pending: Option<ScanTicket>,
}

impl<R: Renderer, S: LayerSink> Controller<R, S> {
    /// Creates a controller starting on `start` in `all` mode.
    ///
    /// Nothing is rendered until [`Controller::start`] is called.
    pub fn new(
        catalog: ThemeCatalog,
        layout: AssetLayout,
        start: Category,
        renderer: R,
        compositor: Compositor<S>,
    ) -> Self {
        Self {
            state: BrowsingState::new(start),
            catalog,
            layout,
            renderer,
            compositor,
            generation: 0,
            pending: None,
        }
    }

    /// Current browsing state.
    pub fn state(&self) -> BrowsingState {
        self.state
    }

    /// The theme catalog.
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// The selected theme, if the catalog is not empty.
    pub fn current_theme(&self) -> Option<&Theme> {
        self.catalog.get(self.state.theme_index)
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably (for presentation-only state such as cursors).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The layer compositor.
    pub fn compositor(&self) -> &Compositor<S> {
        &self.compositor
    }

    /// Returns true while a requested scan has not been completed.
    pub fn is_scanning(&self) -> bool {
        self.pending.is_some()
    }

    /// Renders the initial category.
    pub fn start(&mut self) -> Refresh {
        self.refresh()
    }

    /// Switches between `all` and `theme` browsing.
    pub fn set_mode(&mut self, mode: BrowseMode) -> Refresh {
        debug!(from = %self.state.mode, to = %mode, "mode changed");
        self.state.mode = mode;
        if mode == BrowseMode::Theme {
            self.render_theme();
        }
        self.refresh()
    }

    /// Selects a category.
    pub fn set_category(&mut self, category: Category) -> Refresh {
        debug!(from = %self.state.category, to = %category, "category changed");
        self.state.category = category;
        self.refresh()
    }

    /// Moves the theme carousel by `direction`, wrapping at both ends.
    pub fn move_theme(&mut self, direction: isize) -> Refresh {
        self.state.theme_index = self.catalog.wrap_index(self.state.theme_index, direction);
        debug!(index = self.state.theme_index, "theme changed");
        self.render_theme();
        self.refresh()
    }

    /// Hands back the result of a scan.
    ///
    /// Returns false and renders nothing if the ticket was superseded by a
    /// later refresh, the category changed, or the mode is no longer `all`.
    pub fn complete_scan(&mut self, ticket: ScanTicket, items: Vec<ItemPath>) -> bool {
        let current = self.pending == Some(ticket)
            && ticket.category == self.state.category
            && self.state.mode == BrowseMode::All;
        if !current {
            debug!(
                category = %ticket.category,
                generation = ticket.generation,
                "discarding stale scan result"
            );
            return false;
        }

        self.pending = None;
        self.renderer.render_items(ticket.category, &items);
        true
    }

    /// Wears or removes an item chosen from the grid.
    pub fn select_item(&mut self, category: Category, path: &ItemPath) -> ApplyOutcome {
        self.compositor.apply_item(category, path)
    }

    fn render_theme(&mut self) {
        let index = self.state.theme_index;
        let count = self.catalog.len();
        self.renderer
            .render_theme(self.catalog.get(index), index, count);
    }

    fn refresh(&mut self) -> Refresh {
        self.generation += 1;
        let category = self.state.category;

        match self.state.mode {
            BrowseMode::Theme => {
                self.pending = None;
                let items = filter_theme(self.current_theme(), category, &self.layout);
                self.renderer.render_items(category, &items);
                Refresh::Rendered
            }
            BrowseMode::All => {
                let ticket = ScanTicket {
                    generation: self.generation,
                    category,
                };
                self.pending = Some(ticket);
                self.renderer.show_loading(category);
                Refresh::Scan(ticket)
            }
        }
    }
}

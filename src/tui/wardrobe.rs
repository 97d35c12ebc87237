//! Wardrobe views: item grid, theme carousel and character preview.
//!
//! `GridView` is the renderer the controller draws into; `PreviewView` is the
//! layer sink mirroring the outfit. Both are plain state read by the widgets
//! below on every frame.

use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{BrowseMode, Category, ItemPath, LayerStack, Theme as OutfitTheme};
use crate::services::{LayerSink, Renderer};

use super::Theme;

/// Grid loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStatus {
    /// Waiting for a scan
    Loading,
    /// Items (possibly none) are shown
    Ready,
}

/// Carousel card for the selected theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCard {
    /// Theme name, `None` when the catalog is empty
    pub name: Option<String>,
    /// Thumbnail path
    pub thumb: Option<String>,
    /// Position in the catalog
    pub index: usize,
    /// Catalog size
    pub count: usize,
}

/// Item grid for the current category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Category the grid shows
    pub category: Category,
    /// Loading state
    pub status: GridStatus,
    /// Items in display order
    pub items: Vec<ItemPath>,
    /// Cursor position within `items`
    pub cursor: usize,
    /// Carousel card, set once theme mode is entered
    pub theme_card: Option<ThemeCard>,
}

impl GridView {
    /// Creates an empty grid for `category`.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            status: GridStatus::Loading,
            items: Vec::new(),
            cursor: 0,
            theme_card: None,
        }
    }

    /// Item under the cursor.
    #[must_use]
    pub fn selected(&self) -> Option<&ItemPath> {
        self.items.get(self.cursor)
    }

    /// Moves the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.cursor = 0;
            return;
        }
        let len = self.items.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }
}

impl Renderer for GridView {
    fn show_loading(&mut self, category: Category) {
        self.category = category;
        self.status = GridStatus::Loading;
        self.items.clear();
        self.cursor = 0;
    }

    fn render_items(&mut self, category: Category, items: &[ItemPath]) {
        self.category = category;
        self.status = GridStatus::Ready;
        self.items = items.to_vec();
        self.cursor = 0;
    }

    fn render_theme(&mut self, theme: Option<&OutfitTheme>, index: usize, count: usize) {
        self.theme_card = Some(ThemeCard {
            name: theme.map(|t| t.name.clone()),
            thumb: theme.map(|t| t.thumb.clone()),
            index,
            count,
        });
    }
}

/// Character preview mirror.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewView {
    /// Description of the most recent layer change
    pub last_change: Option<String>,
    /// Number of layer changes seen
    pub changes: usize,
    /// Categories currently dressed
    worn: HashSet<Category>,
}

impl LayerSink for PreviewView {
    fn layer_changed(&mut self, category: Category, path: Option<&ItemPath>) {
        self.changes += 1;
        match path {
            Some(path) => {
                self.worn.insert(category);
                self.last_change =
                    Some(format!("{} ← {}", category.display_name(), path.file_name()));
            }
            // Exclusion clears also arrive for empty slots; only report real ones.
            None if self.worn.remove(&category) => {
                self.last_change = Some(format!("{} cleared", category.display_name()));
            }
            None => {}
        }
    }
}

/// Header with mode and theme carousel.
pub fn render_header(f: &mut Frame, area: Rect, mode: BrowseMode, grid: &GridView, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            " MyStyle ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        mode_tab("All items", mode == BrowseMode::All, theme),
        Span::raw(" "),
        mode_tab("Themes", mode == BrowseMode::Theme, theme),
    ];

    if mode == BrowseMode::Theme {
        spans.push(Span::raw("   "));
        match &grid.theme_card {
            Some(ThemeCard {
                name: Some(name),
                index,
                count,
                ..
            }) => {
                spans.push(Span::styled("◀ ", Style::default().fg(theme.primary)));
                spans.push(Span::styled(
                    name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" ({}/{})", index + 1, count),
                    Style::default().fg(theme.text_muted),
                ));
                spans.push(Span::styled(" ▶", Style::default().fg(theme.primary)));
            }
            _ => spans.push(Span::styled(
                "No themes available",
                Style::default().fg(theme.text_muted),
            )),
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(header, area);
}

fn mode_tab(label: &str, active: bool, theme: &Theme) -> Span<'static> {
    if active {
        Span::styled(
            format!("[{label}]"),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(theme.text_muted))
    }
}

/// Category list with the current one highlighted.
pub fn render_categories(f: &mut Frame, area: Rect, current: Category, theme: &Theme) {
    let items: Vec<ListItem> = Category::ALL
        .iter()
        .map(|c| ListItem::new(Line::from(Span::raw(c.display_name()))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Category ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.surface)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Category::ALL.iter().position(|c| *c == current));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Item grid, or the loading / empty placeholder.
pub fn render_items(f: &mut Frame, area: Rect, grid: &GridView, stack: &LayerStack, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} ", grid.category.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));

    if grid.status == GridStatus::Loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(theme.warning),
        )))
        .block(block);
        f.render_widget(loading, area);
        return;
    }

    if grid.items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No items",
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let worn = stack.worn(grid.category);
    let items: Vec<ListItem> = grid
        .items
        .iter()
        .map(|path| {
            let mut spans = vec![Span::styled(
                path.file_name().to_string(),
                Style::default().fg(theme.text),
            )];
            if worn == Some(path) {
                spans.push(Span::styled("  (worn)", Style::default().fg(theme.success)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(grid.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Character layers from bottom to top.
pub fn render_preview(f: &mut Frame, area: Rect, stack: &LayerStack, theme: &Theme) {
    let lines: Vec<Line> = stack
        .in_z_order()
        .into_iter()
        .rev()
        .map(|(category, path)| {
            let value = match path {
                Some(path) => Span::styled(
                    path.file_name().to_string(),
                    Style::default().fg(theme.success),
                ),
                None => Span::styled("-", Style::default().fg(theme.text_muted)),
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", category.display_name()),
                    Style::default().fg(theme.text),
                ),
                value,
            ])
        })
        .collect();

    let preview = Paragraph::new(lines).block(
        Block::default()
            .title(" Character ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(preview, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_renderer_states() {
        let mut grid = GridView::new(Category::Hair);
        grid.render_items(Category::Hair, &[ItemPath::new("a.png"), ItemPath::new("b.png")]);
        grid.move_cursor(1);
        assert_eq!(grid.selected().unwrap().as_str(), "b.png");

        grid.show_loading(Category::Eyes);
        assert_eq!(grid.status, GridStatus::Loading);
        assert_eq!(grid.category, Category::Eyes);
        assert!(grid.selected().is_none());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut grid = GridView::new(Category::Hair);
        grid.render_items(
            Category::Hair,
            &[ItemPath::new("a.png"), ItemPath::new("b.png"), ItemPath::new("c.png")],
        );
        grid.move_cursor(-1);
        assert_eq!(grid.cursor, 2);
        grid.move_cursor(1);
        assert_eq!(grid.cursor, 0);

        grid.render_items(Category::Hair, &[]);
        grid.move_cursor(1);
        assert_eq!(grid.cursor, 0);
    }

    #[test]
    fn test_preview_records_changes() {
        let mut preview = PreviewView::default();
        preview.layer_changed(Category::Dress, Some(&ItemPath::new("x/dress/dress_001.png")));
        preview.layer_changed(Category::Top, None);
        assert_eq!(preview.changes, 2);
        assert_eq!(preview.last_change.as_deref(), Some("Dress ← dress_001.png"));

        preview.layer_changed(Category::Dress, None);
        assert_eq!(preview.changes, 3);
        assert_eq!(preview.last_change.as_deref(), Some("Dress cleared"));
    }
}

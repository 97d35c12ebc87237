//! Terminal user interface components and state management.
//!
//! This module contains the wardrobe loop, `AppState`, event handling,
//! and the widgets drawn with Ratatui.

// Allow intentional type casts for cursor arithmetic
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod input;
pub mod status_bar;
pub mod theme;
pub mod wardrobe;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

use crate::config::Config;
use crate::models::{LayerStack, ThemeCatalog};
use crate::services::{Compositor, Controller, ExistenceOracle, ScanDispatcher, Scanner};

pub use input::{action_for, dispatch_action, Action};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wardrobe::{GridStatus, GridView, PreviewView, ThemeCard};

/// Wardrobe state shared by the event loop and the widgets.
pub struct AppState<O> {
    /// Browsing controller drawing into the grid and the preview
    pub controller: Controller<GridView, PreviewView>,
    /// Runs all-mode scans in the background
    pub dispatcher: ScanDispatcher<O>,
    /// UI colors
    pub theme: Theme,
    /// Message from the last user action
    pub status_message: String,
    /// Set when the user quits
    pub should_quit: bool,
}

impl<O: ExistenceOracle + 'static> AppState<O> {
    /// Creates the wardrobe on the configured start category.
    ///
    /// Scans are spawned onto `runtime`.
    pub fn new(config: &Config, catalog: ThemeCatalog, scanner: Scanner<O>, runtime: Handle) -> Self {
        let start = config.ui.start_category;
        let controller = Controller::new(
            catalog,
            config.asset_layout(),
            start,
            GridView::new(start),
            Compositor::new(LayerStack::full(), PreviewView::default()),
        );

        Self {
            controller,
            dispatcher: ScanDispatcher::new(scanner, runtime),
            theme: Theme::from_mode(config.ui.theme_mode),
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// Shows the start category.
    pub fn start(&mut self) {
        let refresh = self.controller.start();
        self.dispatcher.handle(refresh);
    }

    /// Renders finished scans that are still current.
    pub fn poll_scans(&mut self) -> bool {
        self.dispatcher.deliver(&mut self.controller)
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<O: ExistenceOracle + 'static>(
    state: &mut AppState<O>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    state.start();

    loop {
        // Pick up scans that finished since the last frame
        state.poll_scans();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = action_for(key) {
                    if dispatch_action(state, action) {
                        break;
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("wardrobe closed");
    Ok(())
}

/// Render the UI from current state
fn render<O: ExistenceOracle + 'static>(f: &mut Frame, state: &AppState<O>) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Wardrobe
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(34),
        ])
        .split(rows[1]);

    let browsing = state.controller.state();
    let grid = state.controller.renderer();
    let stack = state.controller.compositor().stack();

    wardrobe::render_header(f, rows[0], browsing.mode, grid, &state.theme);
    wardrobe::render_categories(f, columns[0], browsing.category, &state.theme);
    wardrobe::render_items(f, columns[1], grid, stack, &state.theme);
    wardrobe::render_preview(f, columns[2], stack, &state.theme);
    StatusBar::render(f, rows[2], state, &state.theme);
}

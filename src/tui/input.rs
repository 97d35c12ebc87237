//! Keyboard input: key bindings and action dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Category;
use crate::services::{ApplyOutcome, ExistenceOracle};

use super::AppState;

/// Wardrobe actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the next category
    NextCategory,
    /// Select the previous category
    PreviousCategory,
    /// Move the item cursor up
    CursorUp,
    /// Move the item cursor down
    CursorDown,
    /// Wear or remove the item under the cursor
    Select,
    /// Switch between all-items and theme browsing
    ToggleMode,
    /// Show the next theme
    NextTheme,
    /// Show the previous theme
    PreviousTheme,
    /// Leave the wardrobe
    Quit,
}

/// Key bindings shown in the status bar.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("←→", "Category"),
    ("↑↓", "Item"),
    ("Enter", "Wear/Remove"),
    ("m", "Mode"),
    ("[ ]", "Theme"),
    ("q", "Quit"),
];

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::PreviousCategory),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char(']' | '.') => Some(Action::NextTheme),
        KeyCode::Char('[' | ',') => Some(Action::PreviousTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Applies an action to the wardrobe.
///
/// Returns true if the user asked to quit.
pub fn dispatch_action<O: ExistenceOracle + 'static>(state: &mut AppState<O>, action: Action) -> bool {
    let current = state.controller.state();
    if action != Action::Select {
        // Let the status bar fall back to the latest layer change.
        state.status_message.clear();
    }

    match action {
        Action::NextCategory => {
            let refresh = state.controller.set_category(current.category.next());
            state.dispatcher.handle(refresh);
        }
        Action::PreviousCategory => {
            let refresh = state.controller.set_category(current.category.previous());
            state.dispatcher.handle(refresh);
        }
        Action::CursorUp => state.controller.renderer_mut().move_cursor(-1),
        Action::CursorDown => state.controller.renderer_mut().move_cursor(1),
        Action::Select => {
            let grid = state.controller.renderer();
            if let Some(path) = grid.selected().cloned() {
                let category = grid.category;
                let stack = state.controller.compositor().stack();
                let covered: Vec<Category> = category
                    .excludes()
                    .iter()
                    .copied()
                    .filter(|c| stack.worn(*c).is_some())
                    .collect();

                let outcome = state.controller.select_item(category, &path);
                state.status_message = match outcome {
                    ApplyOutcome::Worn if covered.is_empty() => {
                        format!("Wearing {}", path.file_name())
                    }
                    ApplyOutcome::Worn => {
                        let names: Vec<&str> = covered.iter().map(|c| c.display_name()).collect();
                        format!("Wearing {}, took off {}", path.file_name(), names.join(", "))
                    }
                    ApplyOutcome::Removed => format!("Removed {}", path.file_name()),
                    ApplyOutcome::Ignored => {
                        format!("{} has no layer on this character", category.display_name())
                    }
                };
            }
        }
        Action::ToggleMode => {
            let refresh = state.controller.set_mode(current.mode.toggled());
            state.dispatcher.handle(refresh);
        }
        Action::NextTheme | Action::PreviousTheme => {
            let direction = if action == Action::NextTheme { 1 } else { -1 };
            let refresh = state.controller.move_theme(direction);
            state.dispatcher.handle(refresh);
        }
        Action::Quit => {
            state.should_quit = true;
            return true;
        }
    }

    false
}

//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::ExistenceOracle;

use super::input::KEY_HELP;
use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the latest message and key help
    pub fn render<O: ExistenceOracle + 'static>(
        f: &mut Frame,
        area: Rect,
        state: &AppState<O>,
        theme: &Theme,
    ) {
        let mut status = Vec::new();
        if state.controller.is_scanning() {
            status.push(Span::styled(
                "Scanning... ",
                Style::default().fg(theme.warning),
            ));
        }

        let message = if state.status_message.is_empty() {
            state.controller.compositor().sink().last_change.clone()
        } else {
            Some(state.status_message.clone())
        };
        if let Some(message) = message {
            status.push(Span::styled(message, Style::default().fg(theme.text)));
        }

        let mut help = Vec::new();
        for (i, (key, action)) in KEY_HELP.iter().enumerate() {
            if i > 0 {
                help.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            help.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            help.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_muted),
            ));
        }

        let paragraph = Paragraph::new(vec![Line::from(status), Line::from(help)]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }
}

//! Footer rendering for the stakescope TUI.
//!
//! Shows keyboard hints, or the most recent fetch error when one occurred.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR};

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts or the last error.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.last_error {
        Some(error) => Paragraph::new(format!("Error: {error}"))
            .style(Style::default().fg(ERROR_COLOR))
            .alignment(Alignment::Center),
        None => Paragraph::new("q:Quit  r:Refresh  /:Address  ↑↓:Scroll")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
    };

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

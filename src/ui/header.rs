//! Header rendering for the stakescope TUI.
//!
//! Renders the application name, the viewed address, and the
//! network / price indicators.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::view::format::format_usd;

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let inner_y = area.y + 1;

    // App name on the left
    let name = Line::from(vec![
        Span::styled("[", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            "stake",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "scope",
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(MUTED_COLOR)),
    ]);
    let name_area = Rect::new(
        area.x + 2,
        inner_y,
        14.min(area.width.saturating_sub(4)),
        1,
    );
    frame.render_widget(Paragraph::new(name), name_area);

    // Viewed address in the middle
    if area.width > 50 {
        let address_area = Rect::new(area.x + 18, inner_y, area.width.saturating_sub(42), 1);
        let address = Paragraph::new(app.address.as_str())
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(address, address_area);
    }

    // Network and price on the right
    if area.width > 40 {
        let mut spans = vec![Span::styled(
            app.network.as_str(),
            Style::default().fg(SUCCESS_COLOR),
        )];
        if let Some(stats) = &app.data.stats {
            spans.push(Span::styled(" | ", Style::default().fg(MUTED_COLOR)));
            spans.push(Span::styled(
                format_usd(stats.price()),
                Style::default().fg(SUCCESS_COLOR),
            ));
        }
        let indicator = Line::from(spans);
        let indicator_width = 22.min(area.width.saturating_sub(4));
        let indicator_area = Rect::new(
            area.x + area.width.saturating_sub(indicator_width + 2),
            inner_y,
            indicator_width,
            1,
        );
        frame.render_widget(
            Paragraph::new(indicator).alignment(Alignment::Right),
            indicator_area,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetaStats;
    use crate::state::{App, StartupOptions};
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn test_app() -> App {
        App::new(StartupOptions {
            address: "pool1headeraddr".to_string(),
            ..StartupOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_header_shows_name_address_and_network() {
        let app = test_app();
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("stake"));
        assert!(content.contains("scope"));
        assert!(content.contains("pool1headeraddr"));
        assert!(content.contains(app.network.as_str()));
    }

    #[test]
    fn test_header_shows_price_once_stats_arrive() {
        let mut app = test_app();
        app.data
            .set_stats(MetaStats::from_json(&json!({"current_price": 1.42})));

        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("$1.42"));
    }

    #[test]
    fn test_header_tiny_area_does_not_panic() {
        let app = test_app();
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
    }
}

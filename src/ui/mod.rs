//! UI rendering module for the stakescope TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the header, the account page, the footer, and the address
//! prompt overlay.
//!
//! # Module Structure
//!
//! - `panels` - Main content panels (the account page)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
};

use crate::state::App;
use crate::theme::PRIMARY_COLOR;

use helpers::create_popup_block;
use layout::{calculate_app_layout, centered_popup_area};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = calculate_app_layout(frame.area());

    header::render(frame, layout.header, app);
    panels::account::render_account_page(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    if app.address_input.is_some() {
        render_address_prompt(app, frame, frame.area());
    }
}

// ============================================================================
// Address Prompt Overlay
// ============================================================================

/// Renders the address prompt popup over the page.
fn render_address_prompt(app: &App, frame: &mut Frame, area: Rect) {
    let Some(input) = &app.address_input else {
        return;
    };

    let popup_area = centered_popup_area(area, 60, 3);
    let popup_block = create_popup_block("Go to address");
    let inner = popup_block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let prompt = Paragraph::new(format!("{input}█")).style(Style::default().fg(PRIMARY_COLOR));
    frame.render_widget(prompt, inner);
}

// ============================================================================
// Tests
// ============================================================================

//! Input handling: keyboard and mouse commands.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use super::App;

/// Rows jumped by a page scroll.
const PAGE_SCROLL: usize = 5;

impl App {
    /// Handles a terminal key event.
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.address_input.is_some() {
            self.handle_address_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('/') => self.address_input = Some(String::new()),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_txns_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_txns_down(1),
            KeyCode::PageUp => self.scroll_txns_up(PAGE_SCROLL),
            KeyCode::PageDown => self.scroll_txns_down(PAGE_SCROLL),
            _ => {}
        }
    }

    /// Handles keys while the address prompt is open.
    fn handle_address_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.address_input = None;
            }
            KeyCode::Enter => {
                let input = self.address_input.take().unwrap_or_default();
                let address = input.trim().to_string();
                if !address.is_empty() {
                    self.set_address(address);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.address_input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.address_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Handles a terminal mouse event (wheel scrolling over the table).
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_txns_up(1),
            MouseEventKind::ScrollDown => self.scroll_txns_down(1),
            _ => {}
        }
    }

    fn scroll_txns_up(&mut self, rows: usize) {
        self.txn_scroll = self.txn_scroll.saturating_sub(rows);
    }

    fn scroll_txns_down(&mut self, rows: usize) {
        let max = self.data.transaction_count().saturating_sub(1);
        self.txn_scroll = (self.txn_scroll + rows).min(max);
    }
}

// ============================================================================
// Tests
// ============================================================================

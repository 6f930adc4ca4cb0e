//! Header and common widget rendering
//!
//! The decorated title banner, the status line and the navigation bar.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header renderer containing the title banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Lines rendered by [`Self::render_header`]
    pub const HEIGHT: u16 = 4;

    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone()).alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        let star = Styles::decoration();
        let snow = Style::default().fg(Colors::SNOW);
        vec![
            Line::from(vec![
                Span::styled("❄   ", snow),
                Span::styled(".    *    .", star),
                Span::styled("   ❄", snow),
            ]),
            Line::from(vec![
                Span::styled("★  ", star),
                Span::styled("S E C R E T", Styles::title()),
                Span::raw("   "),
                Span::styled("S A N T A", Style::default().fg(Colors::SECONDARY)),
                Span::styled("  ★", star),
            ]),
            Line::from(vec![
                Span::styled("*    .", star),
                Span::styled("   /\\   ", Style::default().fg(Colors::SECONDARY)),
                Span::styled(".    *", star),
            ]),
            Line::from(""),
        ]
    }
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(state.kind());
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.kind(), keybinding_ctx);
    let area = f.area();
    help_overlay.render(f, area);
}

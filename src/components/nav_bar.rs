//! Bottom navigation bar showing the keys available in the current view

use super::keybindings::NavBarItem;
use crate::theme::Colors;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Colors::NAV_HINT)));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default().fg(Colors::NAV_KEY),
            ));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Style::default().fg(Colors::FG_SECONDARY),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}

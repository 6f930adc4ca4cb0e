//! User interface rendering module
//!
//! - `header` - title banner, status line, navigation bar, help overlay
//! - `form` - the sign-up form
//! - `result` - alias display and the wheel view
//! - `wheel` - the wheel of fortune canvas

mod form;
mod header;
mod result;
mod wheel;

pub use header::HeaderRenderer;

use crate::app::{AppState, ViewKind};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
};
use std::time::Instant;

/// Widest the content column gets; the rest of the screen stays empty
const CONTENT_WIDTH: u16 = 60;

/// Main UI renderer
pub struct UiRenderer {
    header_renderer: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header_renderer: HeaderRenderer::new(),
        }
    }

    /// Draw one frame of the current state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
        now: Instant,
    ) {
        let [header_area, body_area, status_area, nav_area] = Layout::vertical([
            Constraint::Length(HeaderRenderer::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

        let [body_area] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(body_area);

        self.header_renderer.render_header(f, header_area);

        match state.kind() {
            ViewKind::Form | ViewKind::Submitting => form::render_form(f, body_area, state),
            ViewKind::Result => result::render_result(f, body_area, state, now),
        }

        header::render_status(f, status_area, &state.status_message);
        header::render_nav_bar(f, state, keybinding_ctx, nav_area);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}

//! Sign-up form rendering

use crate::app::AppState;
use crate::submission::FormField;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Render the form. Also places the terminal cursor in the focused field
/// unless a submission is in flight.
pub fn render_form(f: &mut Frame, area: Rect, state: &AppState) {
    let error = state.error_message();
    let error_height = if error.is_some() { 3 } else { 0 };

    let [error_area, email_area, name_area, _, button_area] = Layout::vertical([
        Constraint::Length(error_height),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    if let Some(message) = error {
        render_error_banner(f, error_area, message);
    }

    let submitting = state.is_submitting();
    for (field, field_area) in FormField::iter().zip([email_area, name_area]) {
        let focused = !submitting && state.fields.focus == field;
        render_input(f, field_area, field, state.fields.value(field), focused);

        if focused {
            let typed = u16::try_from(state.fields.value(field).chars().count())
                .unwrap_or(u16::MAX);
            let x = field_area
                .x
                .saturating_add(1)
                .saturating_add(typed)
                .min(field_area.right().saturating_sub(2));
            f.set_cursor_position(Position::new(x, field_area.y + 1));
        }
    }

    render_submit_button(f, button_area, submitting);
}

fn render_error_banner(f: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .style(Styles::error())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Colors::ERROR_LIGHT)),
        );
    f.render_widget(banner, area);
}

fn render_input(f: &mut Frame, area: Rect, field: FormField, value: &str, focused: bool) {
    let border_style = if focused {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let content = if value.is_empty() {
        Line::from(Span::styled(field.placeholder(), Styles::text_muted()))
    } else {
        Line::from(Span::styled(value.to_string(), Styles::text()))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(format!(" {} ", field))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

fn render_submit_button(f: &mut Frame, area: Rect, submitting: bool) {
    let (label, style) = if submitting {
        ("❄ Summoning Santa's Magic...", Styles::button_disabled())
    } else {
        ("🎁 Generate Secret Santa Name", Styles::button_active())
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, area);
}

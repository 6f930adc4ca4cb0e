//! Result view: the alias and the wheel of fortune

use super::wheel::render_wheel;
use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

pub fn render_result(f: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let (Some(alias), Some(wheel)) = (state.alias(), state.wheel()) else {
        return;
    };

    let [title_area, alias_area, greeting_area, _, wheel_title_area, wheel_area, button_area, outcome_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

    let title = Line::from(vec![
        Span::styled("✨ ", Styles::decoration()),
        Span::styled("Your Secret Santa Name", Styles::header()),
        Span::styled(" ✨", Styles::decoration()),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), title_area);

    let alias_chars = u16::try_from(alias.chars().count()).unwrap_or(u16::MAX);
    let alias_width = alias_chars.saturating_add(6).min(alias_area.width);
    let [alias_box] = Layout::horizontal([Constraint::Length(alias_width)])
        .flex(Flex::Center)
        .areas(alias_area);
    let alias_widget = Paragraph::new(alias.to_string())
        .alignment(Alignment::Center)
        .style(Styles::alias())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Colors::SECONDARY)),
        );
    f.render_widget(alias_widget, alias_box);

    let greeting = format!("🎄 Happy gifting, {}! 🎄", state.fields.name.trim());
    f.render_widget(
        Paragraph::new(greeting)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::SECONDARY)),
        greeting_area,
    );

    f.render_widget(
        Paragraph::new("Spin the Wheel of Fortune!")
            .alignment(Alignment::Center)
            .style(Styles::title()),
        wheel_title_area,
    );

    render_wheel(f, wheel_area, wheel, now);

    let (label, style) = if wheel.is_spinning() {
        (" Spinning... ", Styles::button_disabled())
    } else {
        (" 🎁 Spin Wheel ", Styles::button_active())
    };
    let label_chars = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    let button_width = label_chars.saturating_add(2).min(button_area.width);
    let [button_box] = Layout::horizontal([Constraint::Length(button_width)])
        .flex(Flex::Center)
        .areas(button_area);
    f.render_widget(
        Paragraph::new(label).alignment(Alignment::Center).style(style),
        button_box,
    );

    let mut outcome_lines = Vec::new();
    if let Some(outcome) = wheel.outcome() {
        outcome_lines.push(Line::from(Span::styled(
            format!("Selected: {}", outcome.label),
            Styles::success(),
        )));
    }
    if state.selection_history.len() > 1 {
        let previous = &state.selection_history[..state.selection_history.len() - 1];
        outcome_lines.push(Line::from(Span::styled(
            format!("Earlier picks: {}", previous.join(", ")),
            Styles::text_muted(),
        )));
    }
    f.render_widget(
        Paragraph::new(outcome_lines).alignment(Alignment::Center),
        outcome_area,
    );
}

//! Wheel of fortune drawing
//!
//! Segment `i` is drawn `i * 360/N` degrees clockwise from the pointer, and
//! the whole wheel turns counter-clockwise by the display angle, so a wheel
//! turned by `rotation_for(k, ..)` rests with segment `k` under the pointer.

use crate::theme::{Colors, Styles, segment_color};
use crate::wheel::SelectorWheel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::canvas::{Canvas, Circle, Line},
};
use std::time::Instant;

const RADIUS: f64 = 1.0;
const LABEL_RADIUS: f64 = 0.62;
const BOUND: f64 = 1.25;

/// Canvas coordinates of a point `radius` out along `degrees` clockwise from 12 o'clock
fn polar(degrees: f64, radius: f64) -> (f64, f64) {
    let radians = (90.0 - degrees).to_radians();
    (radius * radians.cos(), radius * radians.sin())
}

/// Render the wheel as it looks at `now`
pub fn render_wheel(f: &mut Frame, area: Rect, wheel: &SelectorWheel, now: Instant) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let candidates = wheel.candidates();
    let segments = candidates.len();
    let segment_angle = 360.0 / segments as f64;
    let angle = wheel.display_angle(now);
    let under_pointer = wheel.segment_under_pointer(now);
    let settled = !wheel.is_spinning() && wheel.outcome().is_some();
    // Width of one terminal column in canvas units, for centering labels
    let column = 2.0 * BOUND / f64::from(area.width);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-BOUND, BOUND])
        .y_bounds([-BOUND, BOUND])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: Colors::SNOW,
            });

            for i in 0..segments {
                let center = i as f64 * segment_angle - angle;
                if segments > 1 {
                    let (x, y) = polar(center - segment_angle / 2.0, RADIUS);
                    ctx.draw(&Line {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: Colors::FG_MUTED,
                    });
                }
            }
            ctx.layer();

            for (i, label) in candidates.iter().enumerate() {
                let center = i as f64 * segment_angle - angle;
                let (x, y) = polar(center, LABEL_RADIUS);
                let mut style = Style::default().fg(segment_color(i));
                if i == under_pointer {
                    style = style.add_modifier(Modifier::BOLD);
                    if settled {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                }
                let half_width = label.chars().count() as f64 * column / 2.0;
                ctx.print(
                    x - half_width,
                    y,
                    TextLine::from(Span::styled(label.clone(), style)),
                );
            }

            ctx.print(0.0, BOUND - 0.05, TextLine::from(Span::styled("▼", Styles::title())));
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_points_up_at_zero() {
        let (x, y) = polar(0.0, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);

        let (x, y) = polar(90.0, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}

//! Centralized theme and styling for the TUI
//!
//! A single source of truth for the holiday palette and the styles built
//! from it. Widgets should take colors from here rather than hardcoding them.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Placeholders, hints, disabled text
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Holiday Accents
    // -------------------------------------------------------------------------

    /// Santa red - titles, buttons, the wheel pointer
    pub const PRIMARY: Color = Color::Rgb(220, 38, 38);

    /// Pine green - alias, success text
    pub const SECONDARY: Color = Color::Rgb(22, 163, 74);

    /// Star gold - decorations and highlights
    pub const GOLD: Color = Color::Rgb(250, 204, 21);

    /// Snow white
    pub const SNOW: Color = Color::Rgb(241, 245, 249);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Rgb(22, 163, 74);

    pub const ERROR: Color = Color::Rgb(239, 68, 68);

    /// Light error variant, used for the error banner border
    pub const ERROR_LIGHT: Color = Color::LightRed;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused input border
    pub const BORDER_ACTIVE: Color = Color::Rgb(220, 38, 38);

    /// Unfocused input border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Key label in the navigation bar
    pub const NAV_KEY: Color = Color::Rgb(250, 204, 21);

    /// Segment colors, cycled around the wheel
    pub const SEGMENTS: [Color; 8] = [
        Color::Rgb(248, 113, 113),
        Color::Rgb(251, 191, 36),
        Color::Rgb(163, 230, 53),
        Color::Rgb(52, 211, 153),
        Color::Rgb(34, 211, 238),
        Color::Rgb(129, 140, 248),
        Color::Rgb(232, 121, 249),
        Color::Rgb(251, 113, 133),
    ];
}

/// Color for wheel segment `index`
pub fn segment_color(index: usize) -> Color {
    Colors::SEGMENTS[index % Colors::SEGMENTS.len()]
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (red, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// The alias, big and green
    pub fn alias() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn decoration() -> Style {
        Style::default().fg(Colors::GOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Enabled action button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SNOW)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Button while its action is in flight
    pub fn button_disabled() -> Style {
        Style::default().fg(Colors::FG_SECONDARY).bg(Colors::FG_MUTED)
    }
}

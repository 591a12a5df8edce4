//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::SeriesColor;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders of unfocused panes.
    pub border: Color,
    /// Border color of the pane holding keyboard focus.
    pub border_focused: Color,
    /// Style for section titles and the help heading.
    pub header: Style,
    /// Style for the row under the cursor.
    pub selected: Style,
    /// Style for the focused metric in the metric bar.
    pub tab_active: Style,
    /// Style for the other metrics.
    pub tab_inactive: Style,
    /// Style for an enabled device checkbox.
    pub checked: Style,
    /// Style for the active window button.
    pub window_active: Style,
    /// Style for axes and labels of charts.
    pub axis: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            border_focused: Color::Cyan,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            checked: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            window_active: Style::default().fg(Color::Black).bg(Color::Gray),
            axis: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            checked: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            window_active: Style::default().fg(Color::White).bg(Color::DarkGray),
            axis: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Terminal color for a series.
    pub fn series_color(&self, color: SeriesColor) -> Color {
        let (r, g, b) = color.to_rgb();
        Color::Rgb(r, g, b)
    }

    /// Border color for a pane depending on keyboard focus.
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

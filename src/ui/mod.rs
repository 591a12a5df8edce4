//! UI rendering for the TUI.
//!
//! This module contains the screen layout, the pane renderers and the theme.

pub mod charts;
pub mod common;
pub mod devices;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Areas of the screen, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub metric_bar: Rect,
    pub devices: Rect,
    pub charts: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, metric_bar, content, status] = Layout::vertical([
            Constraint::Length(1), // Header bar
            Constraint::Length(1), // Metric bar
            Constraint::Min(8),    // Devices + charts
            Constraint::Length(1), // Status bar
        ])
        .areas(area);

        let [devices, charts] =
            Layout::horizontal([Constraint::Percentage(25), Constraint::Percentage(75)])
                .areas(content);

        Self {
            header,
            metric_bar,
            devices,
            charts,
            status,
        }
    }
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered =
            Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5u16.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let layout = ScreenLayout::new(area);

    common::render_header(frame, app, layout.header);
    common::render_metric_bar(frame, app, layout.metric_bar);
    devices::render(frame, app, layout.devices);
    charts::render(frame, app, layout.charts);
    common::render_status_bar(frame, app, layout.status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

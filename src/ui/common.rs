//! Common UI components shared across panes.
//!
//! This module contains the header bar, metric bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Pane};
use crate::data::Metric;

/// Divider drawn between metric labels.
const METRIC_DIVIDER: &str = "│";

/// Render the header bar with a selection overview.
///
/// Displays: focused metric, chart count, enabled device count.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let views = app.dashboard.views();
    let enabled: usize = views.iter().map(|v| v.devices.len()).sum();

    let focused = match app.dashboard.focused() {
        Some(metric) => Span::styled(metric.title(), Style::default().fg(app.theme.highlight)),
        None => Span::styled("none", Style::default().add_modifier(Modifier::DIM)),
    };

    let line = Line::from(vec![
        Span::styled(" ♥ ", Style::default().fg(app.theme.highlight)),
        Span::styled("HEALTH DATA DASHBOARD ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ focus: "),
        focused,
        Span::raw(" │ "),
        Span::styled(
            format!("{}", views.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(if views.len() == 1 { " chart" } else { " charts" }),
        Span::raw(" │ "),
        Span::styled(
            format!("{}", enabled),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" sources"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn metric_label(metric: Metric) -> String {
    format!(" {} ", metric.name())
}

/// Render the metric bar.
///
/// The focused metric is highlighted; the cursor is underlined while the
/// Metrics pane has keyboard focus.
pub fn render_metric_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.dashboard.focused();
    let mut spans = Vec::with_capacity(Metric::ALL.len() * 2);

    for (i, metric) in Metric::ALL.iter().enumerate() {
        let mut style = if focused == Some(*metric) {
            app.theme.tab_active
        } else {
            app.theme.tab_inactive
        };
        if app.current_pane == Pane::Metrics && app.metric_cursor == i {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(metric_label(*metric), style));
        spans.push(Span::raw(METRIC_DIVIDER));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Map a column of the metric bar to the metric drawn there.
pub fn metric_at_column(column: u16) -> Option<Metric> {
    let mut start = 0u16;
    for metric in Metric::ALL {
        let width = metric_label(metric).chars().count() as u16;
        if column >= start && column < start + width {
            return Some(metric);
        }
        start += width + METRIC_DIVIDER.chars().count() as u16;
    }
    None
}

/// Render the status bar at the bottom.
///
/// Shows the focused pane and its controls, or a temporary status message.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_pane {
        Pane::Metrics => "←→:metric Enter:select Tab:pane ?:help q:quit",
        Pane::Devices => "↑↓:device Space:toggle 1-4:window Tab:pane ?:help q:quit",
        Pane::Charts => "↑↓:chart 1-4/w:window r:reroll e:export Tab:pane ?:help q:quit",
    };

    let status = format!(" {} | {}", app.current_pane.label(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab/S-Tab   Switch pane"),
        Line::from("  ←/→ h/l     Move metric cursor"),
        Line::from("  ↑/↓ j/k     Move in pane"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Esc         Back to metrics"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Selection",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter/Space Select metric / toggle"),
        Line::from("  1 2 3 4     Week Month 6M Year"),
        Line::from("  w           Cycle time window"),
        Line::from("  r           Regenerate series"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

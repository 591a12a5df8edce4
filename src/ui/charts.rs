//! Chart stack rendering.
//!
//! One card per active metric view, focused metric first. Each card shows
//! the enabled devices, the time window buttons and a line chart with one
//! dataset per device.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Pane};
use crate::data::series::MAX_SAMPLE;
use crate::data::{MetricView, TimeWindow};

/// Preferred height of one chart card, borders included.
const CARD_HEIGHT: u16 = 14;

/// Shown when no metric has an enabled device.
pub const EMPTY_TEXT: &str =
    "No data available. Select a metric and devices to display graphs.";

/// Render the chart stack.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let views = app.dashboard.views();
    let has_focus = app.current_pane == Pane::Charts;

    if views.is_empty() {
        let block = Block::default()
            .title(" Charts ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.pane_border(has_focus));
        let paragraph = Paragraph::new(EMPTY_TEXT)
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let (offset, visible) = visible_range(views.len(), app.chart_cursor, area.height);
    let constraints: Vec<Constraint> =
        (0..visible).map(|_| Constraint::Ratio(1, visible as u32)).collect();
    let slots = Layout::vertical(constraints).split(area);

    for (slot, (index, view)) in slots.iter().zip(views.iter().enumerate().skip(offset)) {
        let selected = has_focus && index == app.chart_cursor;
        render_card(frame, app, view, *slot, selected);
    }
}

/// First card index and number of cards that fit, keeping `cursor` visible.
pub fn visible_range(total: usize, cursor: usize, height: u16) -> (usize, usize) {
    let fit = ((height / CARD_HEIGHT) as usize).max(1);
    let visible = fit.min(total);
    let cursor = cursor.min(total.saturating_sub(1));
    let offset = (cursor + 1).saturating_sub(visible);
    (offset, visible)
}

fn render_card(frame: &mut Frame, app: &App, view: &MetricView, area: Rect, selected: bool) {
    let metric = view.metric;
    let title = format!(" {} - {} ", metric.title(), view.devices.join(", "));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.pane_border(selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [buttons_area, chart_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(inner);

    frame.render_widget(
        Paragraph::new(window_buttons(app, view.window)).alignment(Alignment::Right),
        buttons_area,
    );

    // Points must outlive the datasets borrowing them
    let points: Vec<Vec<(f64, f64)>> = view
        .series
        .iter()
        .map(|s| s.data.iter().enumerate().map(|(i, v)| ((i + 1) as f64, *v as f64)).collect())
        .collect();

    let datasets: Vec<Dataset> = view
        .series
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(app.theme.series_color(series.color)))
                .data(data)
        })
        .collect();

    let len = view.labels.len().max(1);
    let x_labels = vec![
        Span::raw(view.labels.first().cloned().unwrap_or_default()),
        Span::raw(view.labels.get(len / 2).cloned().unwrap_or_default()),
        Span::raw(view.labels.last().cloned().unwrap_or_default()),
    ];
    let max_y = MAX_SAMPLE as f64;
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", MAX_SAMPLE / 2)),
        Span::raw(format!("{}", MAX_SAMPLE)),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(Line::from(format!("{} Data", metric.title())).centered()))
        .x_axis(
            Axis::default()
                .title("Days")
                .style(app.theme.axis)
                .bounds([1.0, len as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(metric.title())
                .style(app.theme.axis)
                .bounds([0.0, max_y])
                .labels(y_labels),
        );

    frame.render_widget(chart, chart_area);
}

/// Window buttons in display order with the active one highlighted.
fn window_buttons(app: &App, active: TimeWindow) -> Line<'static> {
    let mut spans = Vec::new();
    for window in TimeWindow::DISPLAY_ORDER {
        let style = if window == active {
            app.theme.window_active
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!(" {} ", window.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

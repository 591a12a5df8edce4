//! Device checklist pane.
//!
//! Lists the devices whose capabilities include the focused metric, with a
//! checkbox showing whether each is enabled.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::{App, Pane};

/// Render the device checklist.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let has_focus = app.current_pane == Pane::Devices;
    let devices = app.dashboard.devices_for_focus();

    let title = match app.dashboard.focused() {
        Some(metric) => format!(" Smart Devices · {} ({}) ", metric, devices.len()),
        None => " Smart Devices ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.pane_border(has_focus));

    let Some(metric) = app.dashboard.focused() else {
        let hint = Paragraph::new("Select a metric to list its devices.")
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    if devices.is_empty() {
        let hint = Paragraph::new(format!("No device reports {}.", metric))
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let rows: Vec<Row> = devices
        .iter()
        .map(|device| {
            let enabled = app.dashboard.is_enabled(&device.name);
            let (mark, style) = if enabled {
                ("[✓]", app.theme.checked)
            } else {
                ("[ ]", Style::default())
            };
            Row::new(vec![
                Cell::from(mark).style(style),
                Cell::from(device.name.clone()),
            ])
        })
        .collect();

    let widths = [Constraint::Length(3), Constraint::Fill(1)];
    let mut table = Table::new(rows, widths).block(block).column_spacing(1);
    if has_focus {
        table = table.row_highlight_style(app.theme.selected).highlight_symbol("▶ ");
    }

    let offset = scroll_offset(devices.len(), app.device_cursor, area);
    let mut state = TableState::default()
        .with_offset(offset)
        .with_selected(Some(app.device_cursor.min(devices.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// First listed device when the cursor is kept in view.
///
/// Rows are one line each, so this is the offset the table settles on when
/// it scrolls the selected row into the area inside the borders.
pub fn scroll_offset(total: usize, cursor: usize, area: Rect) -> usize {
    let rows = area.height.saturating_sub(2).max(1) as usize;
    let cursor = cursor.min(total.saturating_sub(1));
    (cursor + 1).saturating_sub(rows)
}

/// Map a terminal row inside the devices pane to a device index.
pub fn device_at_row(area: Rect, row: u16, total: usize, cursor: usize) -> Option<usize> {
    // First row after the top border shows the device at the scroll offset
    let first = area.y + 1;
    let last = area.y + area.height.saturating_sub(1);
    if row < first || row >= last {
        return None;
    }
    let index = scroll_offset(total, cursor, area) + (row - first) as usize;
    (index < total).then_some(index)
}

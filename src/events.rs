use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::{App, Pane};
use crate::data::TimeWindow;
use crate::ui::{common, devices, ScreenLayout};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Pane switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_pane();
            } else {
                app.next_pane();
            }
        }
        KeyCode::BackTab => app.prev_pane(),

        // Metric cursor works from any pane
        KeyCode::Left | KeyCode::Char('h') => {
            app.set_pane(Pane::Metrics);
            app.metric_cursor_prev();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.set_pane(Pane::Metrics);
            app.metric_cursor_next();
        }

        // Navigation within the current pane
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Select metric / toggle device / focus chart
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),

        // Time window
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(window) = TimeWindow::from_digit(c) {
                app.set_window(window);
            }
        }
        KeyCode::Char('w') => app.cycle_window(),

        // Regenerate series
        KeyCode::Char('r') => app.regenerate(),

        // Go back
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = app.export_path.clone();
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events against the current screen layout
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, layout: &ScreenLayout) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Down(MouseButton::Left) => {
            if layout.metric_bar.contains(position) {
                if let Some(metric) = common::metric_at_column(mouse.column - layout.metric_bar.x) {
                    app.set_pane(Pane::Metrics);
                    app.select_metric(metric);
                }
            } else if layout.devices.contains(position) {
                app.set_pane(Pane::Devices);
                let total = app.dashboard.devices_for_focus().len();
                if let Some(index) =
                    devices::device_at_row(layout.devices, mouse.row, total, app.device_cursor)
                {
                    app.toggle_device_at(index);
                }
            } else if layout.charts.contains(position) {
                app.set_pane(Pane::Charts);
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => app.go_back(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::{Catalog, Dashboard, DeviceSpec, Metric};
    use crate::ui::Theme;
    use ratatui::layout::Rect;

    fn app() -> App {
        let dashboard = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(13));
        App::new(dashboard, Theme::dark())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_select_metric_and_toggle_with_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.dashboard.focused(), Some(Metric::Steps));

        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.current_pane, Pane::Devices);
        handle_key_event(&mut app, key(KeyCode::Char(' ')));

        let view = app.dashboard.view(Metric::Steps).unwrap();
        assert_eq!(view.devices, vec!["Google Fit".to_string()]);
        assert_eq!(view.series[0].data.len(), 30);
    }

    #[test]
    fn test_digit_keys_set_window() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Tab));
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        handle_key_event(&mut app, key(KeyCode::Char('1')));

        let view = app.dashboard.view(Metric::Steps).unwrap();
        assert_eq!(view.window, TimeWindow::OneWeek);
        assert_eq!(view.series[0].data.len(), 7);
    }

    #[test]
    fn test_space_without_focus_is_ignored() {
        let mut app = app();
        app.set_pane(Pane::Devices);
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(app.dashboard.views().is_empty());
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_mouse_selects_metric_and_toggles_device() {
        let mut app = app();
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 30));

        // " sleep " starts at column 8 of the metric bar
        handle_mouse_event(&mut app, click(9, layout.metric_bar.y), &layout);
        assert_eq!(app.dashboard.focused(), Some(Metric::Sleep));

        // Second device row for sleep is Apple Health
        handle_mouse_event(&mut app, click(3, layout.devices.y + 2), &layout);
        assert_eq!(app.current_pane, Pane::Devices);
        assert!(app.dashboard.is_enabled("Apple Health"));
    }

    #[test]
    fn test_click_in_scrolled_device_list() {
        let specs = (0..10)
            .map(|i| DeviceSpec::new(format!("Dev{}", i), &[Metric::Sleep]))
            .collect();
        let catalog = Catalog::from_specs(specs).unwrap();
        let dashboard = Dashboard::new(catalog, TimeWindow::OneMonth, Some(13));
        let mut app = App::new(dashboard, Theme::dark());
        app.select_metric(Metric::Sleep);
        app.set_pane(Pane::Devices);
        handle_key_event(&mut app, key(KeyCode::End));
        assert_eq!(app.device_cursor, 9);

        // 80x12 leaves seven device rows, so Dev3 is on the first one
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 12));
        handle_mouse_event(&mut app, click(3, layout.devices.y + 1), &layout);

        let view = app.dashboard.view(Metric::Sleep).unwrap();
        assert_eq!(view.devices, vec!["Dev3".to_string()]);
    }

    #[test]
    fn test_left_right_move_metric_cursor() {
        let mut app = app();
        app.set_pane(Pane::Charts);
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.current_pane, Pane::Metrics);
        assert_eq!(app.cursor_metric(), Metric::Sleep);
        handle_key_event(&mut app, key(KeyCode::Left));
        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.cursor_metric(), Metric::Calories);
    }
}

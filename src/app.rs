//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{export_to_file, Dashboard, Metric, TimeWindow, ToggleOutcome};
use crate::ui::Theme;

/// How long a status message stays in the status bar.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Default file written by the export key.
pub const DEFAULT_EXPORT_PATH: &str = "dashboard_export.json";

/// The focusable region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Horizontal bar of metric categories.
    Metrics,
    /// Checklist of devices eligible for the focused metric.
    Devices,
    /// Stack of chart cards.
    Charts,
}

impl Pane {
    /// Cycle to the next pane.
    pub fn next(self) -> Self {
        match self {
            Pane::Metrics => Pane::Devices,
            Pane::Devices => Pane::Charts,
            Pane::Charts => Pane::Metrics,
        }
    }

    /// Cycle to the previous pane.
    pub fn prev(self) -> Self {
        match self {
            Pane::Metrics => Pane::Charts,
            Pane::Devices => Pane::Metrics,
            Pane::Charts => Pane::Devices,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pane::Metrics => "Metrics",
            Pane::Devices => "Devices",
            Pane::Charts => "Charts",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_pane: Pane,
    pub show_help: bool,

    pub dashboard: Dashboard,

    // Cursors, one per pane
    pub metric_cursor: usize,
    pub device_cursor: usize,
    pub chart_cursor: usize,

    pub theme: Theme,
    pub export_path: PathBuf,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(dashboard: Dashboard, theme: Theme) -> Self {
        Self {
            running: true,
            current_pane: Pane::Metrics,
            show_help: false,
            dashboard,
            metric_cursor: 0,
            device_cursor: 0,
            chart_cursor: 0,
            theme,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            status_message: None,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some(msg);
            }
        }
        None
    }

    pub fn next_pane(&mut self) {
        self.current_pane = self.current_pane.next();
    }

    pub fn prev_pane(&mut self) {
        self.current_pane = self.current_pane.prev();
    }

    pub fn set_pane(&mut self, pane: Pane) {
        self.current_pane = pane;
    }

    /// Metric under the metric bar cursor.
    pub fn cursor_metric(&self) -> Metric {
        Metric::ALL[self.metric_cursor.min(Metric::ALL.len() - 1)]
    }

    /// Metric of the chart card under the chart cursor.
    pub fn cursor_chart_metric(&self) -> Option<Metric> {
        self.dashboard.views().get(self.chart_cursor).map(|v| v.metric)
    }

    /// Move the metric cursor left, wrapping around.
    pub fn metric_cursor_prev(&mut self) {
        let len = Metric::ALL.len();
        self.metric_cursor = (self.metric_cursor + len - 1) % len;
    }

    /// Move the metric cursor right, wrapping around.
    pub fn metric_cursor_next(&mut self) {
        self.metric_cursor = (self.metric_cursor + 1) % Metric::ALL.len();
    }

    /// Move the cursor of the current pane down by one item.
    pub fn select_next(&mut self) {
        match self.current_pane {
            Pane::Metrics => self.metric_cursor_next(),
            Pane::Devices => {
                let max = self.dashboard.devices_for_focus().len().saturating_sub(1);
                self.device_cursor = (self.device_cursor + 1).min(max);
            }
            Pane::Charts => {
                let max = self.dashboard.views().len().saturating_sub(1);
                self.chart_cursor = (self.chart_cursor + 1).min(max);
            }
        }
    }

    /// Move the cursor of the current pane up by one item.
    pub fn select_prev(&mut self) {
        match self.current_pane {
            Pane::Metrics => self.metric_cursor_prev(),
            Pane::Devices => self.device_cursor = self.device_cursor.saturating_sub(1),
            Pane::Charts => self.chart_cursor = self.chart_cursor.saturating_sub(1),
        }
    }

    /// Jump to the first item in the current pane.
    pub fn select_first(&mut self) {
        match self.current_pane {
            Pane::Metrics => self.metric_cursor = 0,
            Pane::Devices => self.device_cursor = 0,
            Pane::Charts => self.chart_cursor = 0,
        }
    }

    /// Jump to the last item in the current pane.
    pub fn select_last(&mut self) {
        match self.current_pane {
            Pane::Metrics => self.metric_cursor = Metric::ALL.len() - 1,
            Pane::Devices => {
                self.device_cursor = self.dashboard.devices_for_focus().len().saturating_sub(1)
            }
            Pane::Charts => self.chart_cursor = self.dashboard.views().len().saturating_sub(1),
        }
    }

    /// Enter/Space: act on the item under the cursor of the current pane.
    pub fn activate(&mut self) {
        match self.current_pane {
            Pane::Metrics => self.select_metric(self.cursor_metric()),
            Pane::Devices => self.toggle_device_at(self.device_cursor),
            Pane::Charts => {
                if let Some(metric) = self.cursor_chart_metric() {
                    self.select_metric(metric);
                }
            }
        }
    }

    /// Focus `metric` and move the metric cursor onto it.
    pub fn select_metric(&mut self, metric: Metric) {
        self.dashboard.select_metric(metric);
        self.metric_cursor = metric.index();
        self.device_cursor = 0;
        self.chart_cursor = 0;
    }

    /// Toggle the device at `index` in the focused metric's device list.
    pub fn toggle_device_at(&mut self, index: usize) {
        let Some(metric) = self.dashboard.focused() else {
            self.set_status_message("Select a metric first".to_string());
            return;
        };
        let Some(name) = self.dashboard.devices_for_focus().get(index).map(|d| d.name.clone())
        else {
            return;
        };

        self.device_cursor = index;
        match self.dashboard.toggle_device(&name) {
            ToggleOutcome::Enabled => {
                self.set_status_message(format!("Enabled {} for {}", name, metric));
            }
            ToggleOutcome::Disabled => {
                self.set_status_message(format!("Disabled {} for {}", name, metric));
            }
            ToggleOutcome::Ignored => {
                self.set_status_message(format!("{} does not report {}", name, metric));
            }
        }
        self.clamp_chart_cursor();
    }

    /// Metric a window change applies to: the chart under the cursor in the
    /// Charts pane, the focused metric elsewhere.
    fn window_target(&self) -> Option<Metric> {
        match self.current_pane {
            Pane::Charts => self.cursor_chart_metric().or(self.dashboard.focused()),
            _ => self.dashboard.focused(),
        }
    }

    /// Apply `window` to the targeted metric.
    pub fn set_window(&mut self, window: TimeWindow) {
        let Some(metric) = self.window_target() else {
            self.set_status_message("Select a metric first".to_string());
            return;
        };

        if self.dashboard.set_time_window(metric, window) {
            self.set_status_message(format!("{}: {}", metric.title(), window));
        } else {
            self.set_status_message(format!("Enable a device for {} first", metric));
        }
        self.metric_cursor = metric.index();
        // The targeted chart is now pinned first
        self.chart_cursor = 0;
    }

    /// Advance the targeted metric's window in button order.
    pub fn cycle_window(&mut self) {
        let Some(metric) = self.window_target() else {
            self.set_status_message("Select a metric first".to_string());
            return;
        };
        let current = self
            .dashboard
            .view(metric)
            .map(|v| v.window)
            .unwrap_or(self.dashboard.default_window());
        self.set_window(current.next());
    }

    /// Draw fresh samples for the focused metric.
    pub fn regenerate(&mut self) {
        self.dashboard.recompute();
        if let Some(metric) = self.dashboard.focused() {
            if self.dashboard.view(metric).is_some() {
                self.set_status_message(format!("Regenerated {}", metric));
            }
        }
    }

    fn clamp_chart_cursor(&mut self) {
        let max = self.dashboard.views().len().saturating_sub(1);
        self.chart_cursor = self.chart_cursor.min(max);
    }

    /// Close help first, otherwise return to the metric bar.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        self.current_pane = Pane::Metrics;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current charts to `path`.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        export_to_file(&self.dashboard, path)
    }
}

//! Selection-driven chart state.
//!
//! [`Dashboard`] tracks the focused metric, the devices enabled for each
//! metric and each metric's time window, and derives the chart set from
//! them. Every mutation is followed by an explicit [`Dashboard::recompute`]
//! of the focused metric's view.
//!
//! ```text
//! select_metric ─┐
//! toggle_device ─┼──▶ recompute(focused) ──▶ prune empty view
//! set_time_window┘                       └─▶ regenerate series + labels
//! ```

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::catalog::{Catalog, DeviceSpec};
use super::metric::{Metric, TimeWindow};
use super::series::{day_labels, generate_values, ChartData, Series, SeriesColor};

/// Per-metric chart state.
#[derive(Debug, Clone)]
pub struct MetricView {
    pub metric: Metric,
    /// Enabled devices in the order they were switched on.
    pub devices: Vec<String>,
    pub window: TimeWindow,
    pub series: Vec<Series>,
    pub labels: Vec<String>,
}

impl MetricView {
    fn new(metric: Metric, window: TimeWindow) -> Self {
        Self {
            metric,
            devices: Vec::new(),
            window,
            series: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn has_device(&self, name: &str) -> bool {
        self.devices.iter().any(|d| d == name)
    }

    pub fn chart_data(&self) -> ChartData<'_> {
        ChartData {
            labels: &self.labels,
            datasets: &self.series,
        }
    }
}

/// Result of [`Dashboard::toggle_device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The device was added to the focused metric's view.
    Enabled,
    /// The device was removed; the view is gone if it was the last one.
    Disabled,
    /// Nothing changed: no focused metric, or the device is unknown or
    /// does not support the focused metric.
    Ignored,
}

/// Session state for the health dashboard.
#[derive(Debug)]
pub struct Dashboard {
    catalog: Catalog,
    default_window: TimeWindow,
    focused: Option<Metric>,
    views: BTreeMap<Metric, MetricView>,
    rng: StdRng,
}

impl Dashboard {
    /// Create an empty dashboard.
    ///
    /// A `seed` makes generated series reproducible; without one the
    /// generator is seeded from the OS.
    pub fn new(catalog: Catalog, default_window: TimeWindow, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            default_window,
            focused: None,
            views: BTreeMap::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_window(&self) -> TimeWindow {
        self.default_window
    }

    /// The metric currently receiving device toggles.
    pub fn focused(&self) -> Option<Metric> {
        self.focused
    }

    pub fn view(&self, metric: Metric) -> Option<&MetricView> {
        self.views.get(&metric)
    }

    pub fn chart_data(&self, metric: Metric) -> Option<ChartData<'_>> {
        self.views.get(&metric).map(MetricView::chart_data)
    }

    /// Active views, focused metric pinned first, the rest in catalog order.
    pub fn views(&self) -> Vec<&MetricView> {
        let pinned = self.focused.and_then(|m| self.views.get(&m));
        pinned
            .into_iter()
            .chain(self.views.values().filter(|v| Some(v.metric) != self.focused))
            .collect()
    }

    /// Focus `metric`, creating a view with the default window if needed.
    pub fn select_metric(&mut self, metric: Metric) {
        let refocused = self.focused != Some(metric);
        self.focused = Some(metric);

        let created = !self.views.contains_key(&metric);
        if created {
            self.views.insert(metric, MetricView::new(metric, self.default_window));
        }

        if refocused || created {
            self.recompute();
        }
    }

    /// Flip `device` for the focused metric.
    pub fn toggle_device(&mut self, device: &str) -> ToggleOutcome {
        let Some(metric) = self.focused else {
            debug!(device, "toggle ignored: no metric focused");
            return ToggleOutcome::Ignored;
        };
        if !self.catalog.supports(device, metric) {
            debug!(device, %metric, "toggle ignored: device does not support metric");
            return ToggleOutcome::Ignored;
        }

        let default_window = self.default_window;
        let view = self
            .views
            .entry(metric)
            .or_insert_with(|| MetricView::new(metric, default_window));

        let outcome = if let Some(pos) = view.devices.iter().position(|d| d == device) {
            view.devices.remove(pos);
            ToggleOutcome::Disabled
        } else {
            view.devices.push(device.to_string());
            ToggleOutcome::Enabled
        };

        self.recompute();
        outcome
    }

    /// Set `metric`'s window and focus it.
    ///
    /// Returns whether a view for `metric` exists afterwards; a metric with
    /// no enabled devices keeps no view, so the window is not retained.
    /// Re-applying the window of the already focused view leaves its series
    /// untouched.
    pub fn set_time_window(&mut self, metric: Metric, window: TimeWindow) -> bool {
        let refocused = self.focused != Some(metric);
        self.focused = Some(metric);
        let view = self
            .views
            .entry(metric)
            .or_insert_with(|| MetricView::new(metric, window));
        let changed = view.window != window || view.devices.is_empty();
        view.window = window;

        if refocused || changed {
            self.recompute();
        }
        self.views.contains_key(&metric)
    }

    /// Rebuild the focused metric's series, or drop its view if no device
    /// is enabled.
    pub fn recompute(&mut self) {
        let Some(metric) = self.focused else {
            return;
        };
        let Some(view) = self.views.get_mut(&metric) else {
            return;
        };

        if view.devices.is_empty() {
            self.views.remove(&metric);
            debug!(%metric, "removed view with no devices");
            return;
        }

        let points = view.window.points();
        view.series = view
            .devices
            .iter()
            .enumerate()
            .map(|(index, device)| Series {
                label: format!("{} - {}", device, metric),
                device: device.clone(),
                data: generate_values(&mut self.rng, points),
                color: SeriesColor::for_index(index),
            })
            .collect();
        view.labels = day_labels(points);

        debug!(%metric, window = %view.window, devices = view.devices.len(), "recomputed view");
    }

    /// Devices eligible for the focused metric, in catalog order.
    pub fn devices_for_focus(&self) -> Vec<&DeviceSpec> {
        match self.focused {
            Some(metric) => self.catalog.devices_for(metric),
            None => Vec::new(),
        }
    }

    /// Whether `device` is enabled for the focused metric.
    pub fn is_enabled(&self, device: &str) -> bool {
        self.focused
            .and_then(|m| self.views.get(&m))
            .is_some_and(|v| v.has_device(device))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(1))
    }

    #[test]
    fn test_select_metric_without_devices_keeps_no_view() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        assert_eq!(dash.focused(), Some(Metric::Steps));
        assert!(dash.view(Metric::Steps).is_none());
        assert!(dash.views().is_empty());
    }

    #[test]
    fn test_toggle_without_focus_is_ignored() {
        let mut dash = dashboard();
        assert_eq!(dash.toggle_device("Fitbit"), ToggleOutcome::Ignored);
        assert!(dash.views().is_empty());
    }

    #[test]
    fn test_toggle_unsupported_device_is_ignored() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Pressure);
        assert_eq!(dash.toggle_device("Oura"), ToggleOutcome::Ignored);
        assert_eq!(dash.toggle_device("Nonexistent"), ToggleOutcome::Ignored);
        assert!(dash.view(Metric::Pressure).is_none());
    }

    #[test]
    fn test_toggle_twice_restores_device_set() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Sleep);
        dash.toggle_device("Oura");
        let before = dash.view(Metric::Sleep).unwrap().devices.clone();

        assert_eq!(dash.toggle_device("Whoop"), ToggleOutcome::Enabled);
        assert_eq!(dash.toggle_device("Whoop"), ToggleOutcome::Disabled);

        assert_eq!(dash.view(Metric::Sleep).unwrap().devices, before);
    }

    #[test]
    fn test_last_device_off_removes_view() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");
        assert!(dash.view(Metric::Steps).is_some());

        dash.toggle_device("Fitbit");
        assert!(dash.view(Metric::Steps).is_none());
        assert_eq!(dash.focused(), Some(Metric::Steps));
    }

    #[test]
    fn test_series_length_follows_window() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Heartbeat);
        dash.toggle_device("Garmin");

        for window in TimeWindow::DISPLAY_ORDER {
            assert!(dash.set_time_window(Metric::Heartbeat, window));
            let view = dash.view(Metric::Heartbeat).unwrap();
            assert_eq!(view.window, window);
            assert_eq!(view.labels.len(), window.points());
            assert!(view.series.iter().all(|s| s.data.len() == window.points()));
        }
    }

    #[test]
    fn test_set_window_refocuses_metric() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");
        dash.select_metric(Metric::Sleep);

        assert!(dash.set_time_window(Metric::Steps, TimeWindow::OneWeek));
        assert_eq!(dash.focused(), Some(Metric::Steps));
        assert_eq!(dash.view(Metric::Steps).unwrap().series[0].data.len(), 7);
    }

    #[test]
    fn test_set_window_without_devices_keeps_no_view() {
        let mut dash = dashboard();
        assert!(!dash.set_time_window(Metric::Water, TimeWindow::OneYear));
        assert_eq!(dash.focused(), Some(Metric::Water));
        assert!(dash.view(Metric::Water).is_none());
    }

    #[test]
    fn test_same_window_keeps_series() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");
        let before = dash.view(Metric::Steps).unwrap().series[0].data.clone();

        assert!(dash.set_time_window(Metric::Steps, TimeWindow::OneMonth));
        assert_eq!(dash.view(Metric::Steps).unwrap().series[0].data, before);

        assert!(dash.set_time_window(Metric::Steps, TimeWindow::OneWeek));
        assert_eq!(dash.view(Metric::Steps).unwrap().series[0].data.len(), 7);
    }

    #[test]
    fn test_removed_view_comes_back_with_default_window() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");
        assert!(dash.set_time_window(Metric::Steps, TimeWindow::OneYear));

        assert_eq!(dash.toggle_device("Fitbit"), ToggleOutcome::Disabled);
        assert!(dash.view(Metric::Steps).is_none());

        assert_eq!(dash.toggle_device("Fitbit"), ToggleOutcome::Enabled);
        let view = dash.view(Metric::Steps).unwrap();
        assert_eq!(view.window, dash.default_window());
        assert_eq!(view.series[0].data.len(), 30);
        assert_eq!(view.labels.len(), 30);
    }

    #[test]
    fn test_window_before_devices_is_not_kept() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Sleep);
        assert!(!dash.set_time_window(Metric::Sleep, TimeWindow::OneYear));

        dash.toggle_device("Oura");
        let view = dash.view(Metric::Sleep).unwrap();
        assert_eq!(view.window, TimeWindow::OneMonth);
        assert_eq!(view.series[0].data.len(), 30);
    }

    #[test]
    fn test_new_view_uses_default_window() {
        let mut dash = Dashboard::new(Catalog::builtin(), TimeWindow::SixMonths, Some(3));
        dash.select_metric(Metric::Calories);
        dash.toggle_device("Apple Health");
        let view = dash.view(Metric::Calories).unwrap();
        assert_eq!(view.window, TimeWindow::SixMonths);
        assert_eq!(view.series[0].data.len(), 180);
    }

    #[test]
    fn test_series_labels_and_colors_follow_device_order() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Sleep);
        dash.toggle_device("Whoop");
        dash.toggle_device("Oura");

        let view = dash.view(Metric::Sleep).unwrap();
        let labels: Vec<&str> = view.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Whoop - sleep", "Oura - sleep"]);
        assert_eq!(view.series[0].color.hue, 0);
        assert_eq!(view.series[1].color.hue, 60);
    }

    #[test]
    fn test_views_pin_focused_first() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Garmin");
        dash.select_metric(Metric::Pressure);
        dash.toggle_device("Garmin");
        dash.select_metric(Metric::Sleep);
        dash.toggle_device("Garmin");

        let order: Vec<Metric> = dash.views().iter().map(|v| v.metric).collect();
        assert_eq!(order, vec![Metric::Sleep, Metric::Steps, Metric::Pressure]);

        dash.select_metric(Metric::Pressure);
        let order: Vec<Metric> = dash.views().iter().map(|v| v.metric).collect();
        assert_eq!(order, vec![Metric::Pressure, Metric::Steps, Metric::Sleep]);
    }

    #[test]
    fn test_views_of_other_metrics_survive_focus_change() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");
        let steps_data = dash.view(Metric::Steps).unwrap().series[0].data.clone();

        dash.select_metric(Metric::Sleep);
        dash.toggle_device("Oura");

        assert_eq!(dash.view(Metric::Steps).unwrap().series[0].data, steps_data);
        assert!(!dash.is_enabled("Fitbit"));
        assert!(dash.is_enabled("Oura"));
    }

    #[test]
    fn test_devices_for_focus() {
        let mut dash = dashboard();
        assert!(dash.devices_for_focus().is_empty());

        dash.select_metric(Metric::Pressure);
        let names: Vec<&str> = dash.devices_for_focus().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Whoop", "Garmin"]);
    }

    #[test]
    fn test_chart_data_matches_view() {
        let mut dash = dashboard();
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Google Fit");

        let chart = dash.chart_data(Metric::Steps).unwrap();
        assert_eq!(chart.labels.len(), 30);
        assert_eq!(chart.datasets.len(), 1);
        assert!(dash.chart_data(Metric::Water).is_none());
    }
}

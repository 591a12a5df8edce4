//! JSON export of the current chart set.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::dashboard::{Dashboard, ToggleOutcome};
use super::metric::{Metric, TimeWindow};
use super::series::Series;

/// Exported form of one chart.
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    pub metric: Metric,
    pub window: TimeWindow,
    pub devices: &'a [String],
    pub labels: &'a [String],
    pub datasets: &'a [Series],
}

/// Top-level export document, charts in display order.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub focused: Option<Metric>,
    pub charts: Vec<ChartExport<'a>>,
}

impl<'a> ExportDocument<'a> {
    pub fn from_dashboard(dashboard: &'a Dashboard) -> Self {
        let charts = dashboard
            .views()
            .into_iter()
            .map(|view| ChartExport {
                metric: view.metric,
                window: view.window,
                devices: &view.devices,
                labels: &view.labels,
                datasets: &view.series,
            })
            .collect();

        Self {
            focused: dashboard.focused(),
            charts,
        }
    }
}

/// Focus `metric`, enable each of `devices` once and apply `window`.
///
/// Used for scripted exports, so a device that cannot report `metric` is an
/// error rather than a silent no-op. A device named twice stays enabled.
pub fn apply_selection(
    dashboard: &mut Dashboard,
    metric: Metric,
    devices: &[String],
    window: Option<TimeWindow>,
) -> Result<()> {
    dashboard.select_metric(metric);
    for device in devices {
        if dashboard.is_enabled(device) {
            continue;
        }
        if dashboard.toggle_device(device) == ToggleOutcome::Ignored {
            bail!("device {} does not report {}", device, metric);
        }
    }
    if let Some(window) = window {
        dashboard.set_time_window(metric, window);
    }
    Ok(())
}

/// Write the dashboard's charts to `path` as pretty-printed JSON.
pub fn export_to_file(dashboard: &Dashboard, path: &Path) -> Result<()> {
    let document = ExportDocument::from_dashboard(dashboard);
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json).with_context(|| format!("writing export to {}", path.display()))?;
    tracing::info!(path = %path.display(), charts = document.charts.len(), "exported dashboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use tempfile::TempDir;

    #[test]
    fn test_export_document_shape() {
        let mut dash = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(9));
        dash.select_metric(Metric::Sleep);
        dash.toggle_device("Oura");
        dash.set_time_window(Metric::Sleep, TimeWindow::OneWeek);

        let value = serde_json::to_value(ExportDocument::from_dashboard(&dash)).unwrap();
        assert_eq!(value["focused"], "sleep");
        let chart = &value["charts"][0];
        assert_eq!(chart["metric"], "sleep");
        assert_eq!(chart["window"], "1 Week");
        assert_eq!(chart["devices"][0], "Oura");
        assert_eq!(chart["labels"].as_array().unwrap().len(), 7);
        assert_eq!(chart["datasets"][0]["label"], "Oura - sleep");
        assert_eq!(chart["datasets"][0]["color"], "hsl(0, 70%, 50%)");
        assert_eq!(chart["datasets"][0]["data"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_export_empty_dashboard() {
        let dash = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(9));
        let value = serde_json::to_value(ExportDocument::from_dashboard(&dash)).unwrap();
        assert!(value["focused"].is_null());
        assert!(value["charts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_apply_selection_enables_repeated_device_once() {
        let mut dash = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(9));
        let devices = vec!["Oura".to_string(), "Oura".to_string()];
        apply_selection(&mut dash, Metric::Sleep, &devices, Some(TimeWindow::OneWeek)).unwrap();

        let view = dash.view(Metric::Sleep).unwrap();
        assert_eq!(view.devices, vec!["Oura".to_string()]);
        assert_eq!(view.series[0].data.len(), 7);
    }

    #[test]
    fn test_apply_selection_rejects_unsupported_device() {
        let mut dash = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(9));
        let devices = vec!["Oura".to_string()];
        let err = apply_selection(&mut dash, Metric::Pressure, &devices, None).unwrap_err();
        assert_eq!(err.to_string(), "device Oura does not report pressure");
    }

    #[test]
    fn test_export_to_file_writes_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let mut dash = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(9));
        dash.select_metric(Metric::Steps);
        dash.toggle_device("Fitbit");

        export_to_file(&dash, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["charts"][0]["datasets"][0]["data"].as_array().unwrap().len(), 30);
    }
}

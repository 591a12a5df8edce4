//! End-to-end selection scenarios through the public API.

use healthdash::{Catalog, Dashboard, Metric, TimeWindow, ToggleOutcome};

fn dashboard() -> Dashboard {
    Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(2024))
}

#[test]
fn steps_with_fitbit_then_off() {
    let mut dash = dashboard();
    dash.select_metric(Metric::Steps);
    assert_eq!(dash.toggle_device("Fitbit"), ToggleOutcome::Enabled);

    let views = dash.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].metric, Metric::Steps);
    assert_eq!(views[0].window, TimeWindow::OneMonth);
    assert_eq!(views[0].series.len(), 1);
    assert_eq!(views[0].series[0].data.len(), 30);
    assert_eq!(views[0].labels.last().map(String::as_str), Some("Day 30"));

    assert_eq!(dash.toggle_device("Fitbit"), ToggleOutcome::Disabled);
    assert!(dash.view(Metric::Steps).is_none());
    assert!(dash.views().is_empty());
}

#[test]
fn sleep_with_oura_and_whoop_for_a_week() {
    let mut dash = dashboard();
    dash.select_metric(Metric::Sleep);
    dash.toggle_device("Oura");
    dash.toggle_device("Whoop");
    assert!(dash.set_time_window(Metric::Sleep, TimeWindow::OneWeek));

    let view = dash.view(Metric::Sleep).unwrap();
    assert_eq!(view.series.len(), 2);
    assert!(view.series.iter().all(|s| s.data.len() == 7));
    assert!(view.series.iter().flat_map(|s| s.data.iter()).all(|v| *v < 10_000));
}

#[test]
fn device_list_matches_capabilities_for_every_metric() {
    let catalog = Catalog::builtin();
    let mut dash = dashboard();
    for metric in Metric::ALL {
        dash.select_metric(metric);
        let listed: Vec<String> = dash.devices_for_focus().iter().map(|d| d.name.clone()).collect();
        for device in catalog.devices() {
            assert_eq!(listed.contains(&device.name), device.supports(metric));
        }
    }
}

#[test]
fn same_seed_gives_same_series() {
    let run = || {
        let mut dash = dashboard();
        dash.select_metric(Metric::Heartbeat);
        dash.toggle_device("Garmin");
        dash.view(Metric::Heartbeat).unwrap().series[0].data.clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn regenerating_keeps_shape() {
    let mut dash = dashboard();
    dash.select_metric(Metric::Calories);
    dash.toggle_device("Apple Health");
    dash.set_time_window(Metric::Calories, TimeWindow::OneYear);
    dash.recompute();

    let view = dash.view(Metric::Calories).unwrap();
    assert_eq!(view.series[0].data.len(), 365);
    assert_eq!(view.labels.len(), 365);
}

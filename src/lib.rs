// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # healthdash
//!
//! A terminal dashboard for exploring mock health metrics.
//!
//! The user picks a metric (steps, sleep, heartbeat, ...), switches on the
//! devices that report it and chooses a time window. Every metric with at
//! least one enabled device gets a line chart of randomly generated values,
//! one series per device.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────────┐  │
//! │  │  events  │──▶│    app    │──▶│    ui    │──▶│ Terminal │  │
//! │  │ (input)  │   │  (panes)  │   │ (render) │   │          │  │
//! │  └──────────┘   └─────┬─────┘   └──────────┘   └──────────┘  │
//! │                       ▼                                      │
//! │                 ┌───────────┐   ┌──────────┐                 │
//! │                 │ Dashboard │◀──│ settings │                 │
//! │                 │  (data)   │   │ (config) │                 │
//! │                 └───────────┘   └──────────┘                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: Metrics, the device [`Catalog`], the selection-driven
//!   [`Dashboard`] state and JSON export
//! - **[`settings`]**: Layered configuration (defaults, file, environment)
//! - **[`app`]**: Pane focus, cursors and status messages on top of the dashboard
//! - **[`events`]**: Keyboard and mouse handling
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive dashboard
//! healthdash
//!
//! # Reproducible series and a custom device list
//! healthdash --seed 42 --config devices.toml
//!
//! # Headless export
//! healthdash --export sleep.json --metric sleep --device Oura --device Whoop --window "1 Week"
//! ```
//!
//! ### As a library
//!
//! ```
//! use healthdash::{Catalog, Dashboard, Metric, TimeWindow};
//!
//! let mut dashboard = Dashboard::new(Catalog::builtin(), TimeWindow::OneMonth, Some(7));
//! dashboard.select_metric(Metric::Sleep);
//! dashboard.toggle_device("Oura");
//! dashboard.set_time_window(Metric::Sleep, TimeWindow::OneWeek);
//!
//! let chart = dashboard.chart_data(Metric::Sleep).unwrap();
//! assert_eq!(chart.labels.len(), 7);
//! assert_eq!(chart.datasets[0].label, "Oura - sleep");
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod settings;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Pane};
pub use data::{
    apply_selection, export_to_file, Catalog, CatalogError, ChartData, Dashboard, DeviceSpec,
    ExportDocument, Metric, MetricView, Series, SeriesColor, TimeWindow, ToggleOutcome,
};
pub use settings::Settings;

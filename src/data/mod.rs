//! Data models and state for the health dashboard.
//!
//! ## Submodules
//!
//! - [`metric`]: Metric categories and time windows
//! - [`catalog`]: The immutable device catalog and its validation
//! - [`series`]: Synthetic series generation, colors and chart input
//! - [`dashboard`]: The selection-driven chart state ([`Dashboard`])
//! - [`export`]: JSON export of the chart set
//!
//! ## Data Flow
//!
//! ```text
//! Settings ──▶ Catalog ──▶ Dashboard
//!                             │
//!        user action ────────▶├──▶ recompute() ──▶ MetricView { series, labels }
//!                             │
//!                             └──▶ ChartData ──▶ ui / export
//! ```

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod metric;
pub mod series;

pub use catalog::{Catalog, DeviceSpec};
pub use dashboard::{Dashboard, MetricView, ToggleOutcome};
pub use error::CatalogError;
pub use export::{apply_selection, export_to_file, ExportDocument};
pub use metric::{Metric, TimeWindow};
pub use series::{ChartData, Series, SeriesColor};

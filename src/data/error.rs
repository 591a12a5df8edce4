//! Error types for catalog parsing and validation.

use thiserror::Error;

/// Errors raised while parsing metric/window names or validating a device
/// catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Metric name is not one of the known categories.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Time window label is not one of the four fixed windows.
    #[error("Unknown time window: {0}")]
    UnknownWindow(String),

    /// A device entry has a blank name.
    #[error("Device name must not be empty")]
    EmptyDeviceName,

    /// Two devices share the same name.
    #[error("Duplicate device: {0}")]
    DuplicateDevice(String),

    /// A device supports no metrics at all.
    #[error("Device {0} has no capabilities")]
    NoCapabilities(String),
}

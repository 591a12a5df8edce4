//! Static device catalog.
//!
//! Devices and their capabilities are fixed for the session. The catalog is
//! built once at startup, either from the built-in list or from the
//! `devices` entries of the settings file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::metric::Metric;

/// A named data source and the metrics it can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    pub capabilities: Vec<Metric>,
}

impl DeviceSpec {
    pub fn new(name: impl Into<String>, capabilities: &[Metric]) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.to_vec(),
        }
    }

    /// Whether this device can report `metric`.
    pub fn supports(&self, metric: Metric) -> bool {
        self.capabilities.contains(&metric)
    }
}

/// Immutable, validated list of devices in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<DeviceSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The six devices shipped with the dashboard.
    pub fn builtin() -> Self {
        use Metric::*;

        Self {
            devices: vec![
                DeviceSpec::new("Google Fit", &[Steps, Sleep, Heartbeat]),
                DeviceSpec::new("Apple Health", &[Steps, Sleep, Heartbeat, Calories]),
                DeviceSpec::new("Whoop", &[Sleep, Heartbeat, Pressure]),
                DeviceSpec::new("Oura", &[Sleep, Heartbeat]),
                DeviceSpec::new("Fitbit", &[Steps, Sleep, Heartbeat, Calories]),
                DeviceSpec::new("Garmin", &[Steps, Sleep, Heartbeat, Pressure, Calories]),
            ],
        }
    }

    /// Build a catalog from user-supplied entries.
    ///
    /// Names are trimmed. Duplicate capabilities on one device are collapsed.
    pub fn from_specs(specs: Vec<DeviceSpec>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut devices = Vec::with_capacity(specs.len());

        for spec in specs {
            let name = spec.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::EmptyDeviceName);
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateDevice(name));
            }

            let mut capabilities: Vec<Metric> = Vec::new();
            for metric in spec.capabilities {
                if !capabilities.contains(&metric) {
                    capabilities.push(metric);
                }
            }
            if capabilities.is_empty() {
                return Err(CatalogError::NoCapabilities(name));
            }

            devices.push(DeviceSpec { name, capabilities });
        }

        Ok(Self { devices })
    }

    pub fn devices(&self) -> &[DeviceSpec] {
        &self.devices
    }

    pub fn device(&self, name: &str) -> Option<&DeviceSpec> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Whether the named device exists and supports `metric`.
    pub fn supports(&self, name: &str, metric: Metric) -> bool {
        self.device(name).is_some_and(|d| d.supports(metric))
    }

    /// Devices eligible for `metric`, in catalog order.
    pub fn devices_for(&self, metric: Metric) -> Vec<&DeviceSpec> {
        self.devices.iter().filter(|d| d.supports(metric)).collect()
    }
}

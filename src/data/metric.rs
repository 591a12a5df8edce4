//! Metric categories and time windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// A category of health data the user may inspect.
///
/// Variants are declared in catalog order, which is also the order used
/// for the metric bar and for unpinned charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Sleep,
    Heartbeat,
    Pressure,
    Water,
    Calories,
}

impl Metric {
    /// All metrics in catalog order.
    pub const ALL: [Metric; 6] = [
        Metric::Steps,
        Metric::Sleep,
        Metric::Heartbeat,
        Metric::Pressure,
        Metric::Water,
        Metric::Calories,
    ];

    /// Lowercase identifier, as used in config files and series labels.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Sleep => "sleep",
            Metric::Heartbeat => "heartbeat",
            Metric::Pressure => "pressure",
            Metric::Water => "water",
            Metric::Calories => "calories",
        }
    }

    /// Capitalized name for titles and axis labels.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Steps => "Steps",
            Metric::Sleep => "Sleep",
            Metric::Heartbeat => "Heartbeat",
            Metric::Pressure => "Pressure",
            Metric::Water => "Water",
            Metric::Calories => "Calories",
        }
    }

    /// Position in catalog order.
    pub fn index(&self) -> usize {
        Metric::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownMetric(s.to_string()))
    }
}

/// The time range a chart covers. Each window maps to a fixed number of
/// daily points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1 Week")]
    OneWeek,
    #[default]
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "6 Months")]
    SixMonths,
    #[serde(rename = "1 Year")]
    OneYear,
}

impl TimeWindow {
    /// Button order on each chart card.
    pub const DISPLAY_ORDER: [TimeWindow; 4] = [
        TimeWindow::OneMonth,
        TimeWindow::OneWeek,
        TimeWindow::SixMonths,
        TimeWindow::OneYear,
    ];

    /// Number of points (days) generated for this window.
    pub fn points(&self) -> usize {
        match self {
            TimeWindow::OneWeek => 7,
            TimeWindow::OneMonth => 30,
            TimeWindow::SixMonths => 180,
            TimeWindow::OneYear => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::OneWeek => "1 Week",
            TimeWindow::OneMonth => "1 Month",
            TimeWindow::SixMonths => "6 Months",
            TimeWindow::OneYear => "1 Year",
        }
    }

    /// Next window in button order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::DISPLAY_ORDER.iter().position(|w| *w == self).unwrap_or(0);
        Self::DISPLAY_ORDER[(pos + 1) % Self::DISPLAY_ORDER.len()]
    }

    /// Window bound to a digit key, shortest first (1 = week ... 4 = year).
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(TimeWindow::OneWeek),
            '2' => Some(TimeWindow::OneMonth),
            '3' => Some(TimeWindow::SixMonths),
            '4' => Some(TimeWindow::OneYear),
            _ => None,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = CatalogError;

    /// Accepts the display label ("6 Months") or a short alias ("6m").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "1 week" | "1w" | "week" => Ok(TimeWindow::OneWeek),
            "1 month" | "1m" | "month" => Ok(TimeWindow::OneMonth),
            "6 months" | "6m" => Ok(TimeWindow::SixMonths),
            "1 year" | "1y" | "year" => Ok(TimeWindow::OneYear),
            _ => Err(CatalogError::UnknownWindow(s.to_string())),
        }
    }
}

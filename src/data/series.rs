//! Synthetic series generation and chart input structures.

use rand::Rng;
use serde::Serialize;

/// Exclusive upper bound for generated sample values.
pub const MAX_SAMPLE: u32 = 10_000;

/// Hue step between consecutive devices on one chart, in degrees.
const HUE_STEP: u16 = 60;

/// An HSL color assigned to a series by its device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct SeriesColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl SeriesColor {
    /// Color for the device at `index` in a view's device list.
    pub fn for_index(index: usize) -> Self {
        Self {
            hue: ((index as u64 * HUE_STEP as u64) % 360) as u16,
            saturation: 70,
            lightness: 50,
        }
    }

    /// Convert to 8-bit RGB for terminals with truecolor support.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = self.saturation as f64 / 100.0;
        let l = self.lightness as f64 / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue as f64 / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }
}

impl From<SeriesColor> for String {
    fn from(color: SeriesColor) -> Self {
        format!("hsl({}, {}%, {}%)", color.hue, color.saturation, color.lightness)
    }
}

/// One plotted sequence: a device's values for a metric over a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    #[serde(skip)]
    pub device: String,
    pub data: Vec<u32>,
    pub color: SeriesColor,
}

/// Renderer input for a single chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData<'a> {
    pub labels: &'a [String],
    pub datasets: &'a [Series],
}

/// Sample `points` uniform values in `[0, MAX_SAMPLE)`.
pub fn generate_values<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<u32> {
    (0..points).map(|_| rng.random_range(0..MAX_SAMPLE)).collect()
}

/// Sequential "Day N" labels starting at 1.
pub fn day_labels(points: usize) -> Vec<String> {
    (1..=points).map(|day| format!("Day {}", day)).collect()
}

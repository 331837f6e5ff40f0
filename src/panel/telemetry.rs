//! Telemetry readouts shown in the center region.
//!
//! Display strings only. Nothing in this crate parses or fetches sensor
//! data; the values are whatever the panel was constructed with.

use serde::{Deserialize, Serialize};

/// The three readouts. Each field is a preformatted display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryReading {
    pub temperature: String,
    pub brightness: String,
    pub humidity: String,
}

impl Default for TelemetryReading {
    fn default() -> Self {
        Self {
            temperature: "23°C".into(),
            brightness: "75%".into(),
            humidity: "45%".into(),
        }
    }
}

impl TelemetryReading {
    /// Label lines, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Temperature: {}", self.temperature),
            format!("Brightness: {}", self.brightness),
            format!("Humidity: {}", self.humidity),
        ]
    }
}

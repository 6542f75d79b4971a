use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::parse_era_date;
use crate::error::{TimelineError, TimelineResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load timeline setup without
/// inventing their own ad-hoc format. Window bounds are era date strings and
/// are parsed strictly at validation time; zoom limits are advisory values
/// the display surface enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    /// Earliest navigable instant, as an era date string.
    #[serde(default = "default_window_min")]
    pub window_min: String,
    /// Latest navigable instant, as an era date string.
    #[serde(default = "default_window_max")]
    pub window_max: String,
    /// Narrowest window the surface should allow, in years.
    #[serde(default = "default_zoom_min_years")]
    pub zoom_min_years: f64,
    /// Widest window the surface should allow, in years.
    #[serde(default = "default_zoom_max_years")]
    pub zoom_max_years: f64,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            window_min: default_window_min(),
            window_max: default_window_max(),
            zoom_min_years: default_zoom_min_years(),
            zoom_max_years: default_zoom_max_years(),
        }
    }
}

impl TimelineEngineConfig {
    /// Creates a config with custom window bounds and default zoom limits.
    #[must_use]
    pub fn new(window_min: impl Into<String>, window_max: impl Into<String>) -> Self {
        Self {
            window_min: window_min.into(),
            window_max: window_max.into(),
            zoom_min_years: default_zoom_min_years(),
            zoom_max_years: default_zoom_max_years(),
        }
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_min_years: f64, zoom_max_years: f64) -> Self {
        self.zoom_min_years = zoom_min_years;
        self.zoom_max_years = zoom_max_years;
        self
    }

    /// Parses and checks the window bounds and zoom limits.
    pub fn validated_window(&self) -> TimelineResult<(DateTime<Utc>, DateTime<Utc>)> {
        let start = parse_era_date(&self.window_min)?;
        let end = parse_era_date(&self.window_max)?;
        if start >= end {
            return Err(TimelineError::InvalidConfig(format!(
                "window bounds out of order: `{}` is not before `{}`",
                self.window_min, self.window_max
            )));
        }
        if !(self.zoom_min_years > 0.0 && self.zoom_min_years < self.zoom_max_years) {
            return Err(TimelineError::InvalidConfig(format!(
                "zoom limits out of order: min={} years, max={} years",
                self.zoom_min_years, self.zoom_max_years
            )));
        }
        Ok((start, end))
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse engine config: {e}")))
    }
}

fn default_window_min() -> String {
    "1000 BC".to_owned()
}

fn default_window_max() -> String {
    "2000 AD".to_owned()
}

fn default_zoom_min_years() -> f64 {
    10.0
}

fn default_zoom_max_years() -> f64 {
    3000.0
}

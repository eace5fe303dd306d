//! Swipe thresholds and their validation.
//!
//! Every update goes through the same checks, so a configuration can be changed
//! between gestures without losing its invariants. An absent threshold is an error;
//! zero and negative values are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TIME_THRESHOLD_MS: f64 = 100.0;
pub const DEFAULT_THRESHOLD_X: f64 = 30.0;
pub const DEFAULT_THRESHOLD_Y: f64 = 30.0;
/// Tick length for interval-style duration sampling (see [`SwipeConfig::set_tick_ms`]).
pub const REFERENCE_TICK_MS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    TimeThreshold,
    ThresholdX,
    ThresholdY,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigField::TimeThreshold => "time threshold",
            ConfigField::ThresholdX => "threshold X",
            ConfigField::ThresholdY => "threshold Y",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {field}")]
    InvalidConfiguration { field: ConfigField },
    #[error("Invalid tick interval {value}: must be a positive number of milliseconds")]
    InvalidTick { value: f64 },
    #[error("malformed swipe configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unvalidated configuration as it arrives from props or JSON.
///
/// Missing keys take the defaults; an explicit `null` maps to `None` and is rejected
/// when converted into a [`SwipeConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSwipeConfig {
    #[serde(default = "default_time_threshold")]
    pub time_threshold: Option<f64>,
    #[serde(default = "default_threshold_x")]
    pub threshold_x: Option<f64>,
    #[serde(default = "default_threshold_y")]
    pub threshold_y: Option<f64>,
    #[serde(default)]
    pub tick_ms: Option<f64>,
}

fn default_time_threshold() -> Option<f64> {
    Some(DEFAULT_TIME_THRESHOLD_MS)
}

fn default_threshold_x() -> Option<f64> {
    Some(DEFAULT_THRESHOLD_X)
}

fn default_threshold_y() -> Option<f64> {
    Some(DEFAULT_THRESHOLD_Y)
}

impl Default for RawSwipeConfig {
    fn default() -> Self {
        Self {
            time_threshold: default_time_threshold(),
            threshold_x: default_threshold_x(),
            threshold_y: default_threshold_y(),
            tick_ms: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSwipeConfig", into = "RawSwipeConfig")]
pub struct SwipeConfig {
    time_threshold_ms: f64,
    threshold_x: f64,
    threshold_y: f64,
    tick_ms: Option<f64>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            time_threshold_ms: DEFAULT_TIME_THRESHOLD_MS,
            threshold_x: DEFAULT_THRESHOLD_X,
            threshold_y: DEFAULT_THRESHOLD_Y,
            tick_ms: None,
        }
    }
}

fn require(value: Option<f64>, field: ConfigField) -> Result<f64, ConfigError> {
    value.ok_or(ConfigError::InvalidConfiguration { field })
}

impl SwipeConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let raw: RawSwipeConfig = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn time_threshold_ms(&self) -> f64 {
        self.time_threshold_ms
    }

    pub fn threshold_x(&self) -> f64 {
        self.threshold_x
    }

    pub fn threshold_y(&self) -> f64 {
        self.threshold_y
    }

    pub fn tick_ms(&self) -> Option<f64> {
        self.tick_ms
    }

    /// Zero means any duration qualifies as a swipe.
    pub fn set_time_threshold(&mut self, value: impl Into<Option<f64>>) -> Result<(), ConfigError> {
        self.time_threshold_ms = require(value.into(), ConfigField::TimeThreshold)?;
        Ok(())
    }

    pub fn set_threshold_x(&mut self, value: impl Into<Option<f64>>) -> Result<(), ConfigError> {
        let v = require(value.into(), ConfigField::ThresholdX)?;
        warn_if_negative(ConfigField::ThresholdX, v);
        self.threshold_x = v;
        Ok(())
    }

    pub fn set_threshold_y(&mut self, value: impl Into<Option<f64>>) -> Result<(), ConfigError> {
        let v = require(value.into(), ConfigField::ThresholdY)?;
        warn_if_negative(ConfigField::ThresholdY, v);
        self.threshold_y = v;
        Ok(())
    }

    /// `None` measures exact durations; `Some(t)` rounds elapsed time down to whole ticks.
    pub fn set_tick_ms(&mut self, value: impl Into<Option<f64>>) -> Result<(), ConfigError> {
        match value.into() {
            Some(t) if !(t.is_finite() && t > 0.0) => Err(ConfigError::InvalidTick { value: t }),
            tick => {
                self.tick_ms = tick;
                Ok(())
            }
        }
    }
}

fn warn_if_negative(field: ConfigField, value: f64) {
    if value < 0.0 {
        log::warn!("{field} is negative ({value}); any movement along that axis will count");
    }
}

impl TryFrom<RawSwipeConfig> for SwipeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSwipeConfig) -> Result<Self, Self::Error> {
        let mut config = SwipeConfig::default();
        config.set_time_threshold(raw.time_threshold)?;
        config.set_threshold_x(raw.threshold_x)?;
        config.set_threshold_y(raw.threshold_y)?;
        config.set_tick_ms(raw.tick_ms)?;
        Ok(config)
    }
}

impl From<SwipeConfig> for RawSwipeConfig {
    fn from(c: SwipeConfig) -> Self {
        Self {
            time_threshold: Some(c.time_threshold_ms),
            threshold_x: Some(c.threshold_x),
            threshold_y: Some(c.threshold_y),
            tick_ms: c.tick_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let c = SwipeConfig::default();
        assert_eq!(c.time_threshold_ms(), 100.0);
        assert_eq!(c.threshold_x(), 30.0);
        assert_eq!(c.threshold_y(), 30.0);
        assert_eq!(c.tick_ms(), None);
    }

    #[test]
    fn absent_value_is_rejected_and_previous_kept() {
        let mut c = SwipeConfig::default();
        c.set_time_threshold(250.0).unwrap();
        let err = c.set_time_threshold(None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidConfiguration {
                field: ConfigField::TimeThreshold
            }
        ));
        assert_eq!(err.to_string(), "Invalid time threshold");
        assert_eq!(c.time_threshold_ms(), 250.0);
    }

    #[test]
    fn axes_are_validated_independently() {
        let mut c = SwipeConfig::default();
        c.set_threshold_x(45.0).unwrap();
        assert!(c.set_threshold_y(None).is_err());
        assert_eq!(c.threshold_x(), 45.0);
        assert_eq!(c.threshold_y(), DEFAULT_THRESHOLD_Y);
    }

    #[test]
    fn zero_and_negative_values_are_accepted() {
        let mut c = SwipeConfig::default();
        c.set_time_threshold(0.0).unwrap();
        c.set_threshold_x(-5.0).unwrap();
        assert_eq!(c.time_threshold_ms(), 0.0);
        assert_eq!(c.threshold_x(), -5.0);
    }

    #[test]
    fn tick_must_be_positive() {
        let mut c = SwipeConfig::default();
        assert!(matches!(c.set_tick_ms(0.0), Err(ConfigError::InvalidTick { .. })));
        assert!(c.set_tick_ms(f64::NAN).is_err());
        c.set_tick_ms(REFERENCE_TICK_MS).unwrap();
        assert_eq!(c.tick_ms(), Some(10.0));
        c.set_tick_ms(None).unwrap();
        assert_eq!(c.tick_ms(), None);
    }

    #[test]
    fn json_missing_keys_fall_back_to_defaults() {
        let c = SwipeConfig::from_json(r#"{"thresholdX": 12}"#).unwrap();
        assert_eq!(c.threshold_x(), 12.0);
        assert_eq!(c.threshold_y(), DEFAULT_THRESHOLD_Y);
        assert_eq!(c.time_threshold_ms(), DEFAULT_TIME_THRESHOLD_MS);
    }

    #[test]
    fn json_null_threshold_is_invalid() {
        let err = SwipeConfig::from_json(r#"{"timeThreshold": 100, "thresholdY": null}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidConfiguration {
                field: ConfigField::ThresholdY
            }
        ));
    }

    #[test]
    fn malformed_json_reports_decode_error() {
        let err = SwipeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn serialized_form_uses_camel_case_keys() {
        let mut c = SwipeConfig::default();
        c.set_tick_ms(10.0).unwrap();
        let json = c.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"timeThreshold":100.0,"thresholdX":30.0,"thresholdY":30.0,"tickMs":10.0}"#
        );
        assert_eq!(SwipeConfig::from_json(&json).unwrap(), c);
    }
}

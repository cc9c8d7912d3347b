use crate::constants::{
    DEFAULT_TIME_UNIT, LOCALE_VAR, LOCATION_VAR, MAX_TIMER_INTERVAL, MOVEMENT_INTERVAL_UNITS,
    STATUS_INTERVAL_UNITS, TIME_UNIT_VAR, VOICE_VAR,
};
use crate::errors::ConfigError;
use crate::types::locale::Locale;
use crate::utils::parse_flag;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::env;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

/// Timing and accessibility settings of a tracking session.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Wall-clock length of one simulated time-unit.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub time_unit: Duration,
    pub status_interval_units: u32,
    pub movement_interval_units: u32,
    pub voice_enabled: bool,
    pub locale: Locale,
    /// Ask the platform for the current position when a session starts.
    pub location_enabled: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            time_unit: DEFAULT_TIME_UNIT,
            status_interval_units: STATUS_INTERVAL_UNITS,
            movement_interval_units: MOVEMENT_INTERVAL_UNITS,
            voice_enabled: false,
            locale: Locale::En,
            location_enabled: true,
        }
    }
}

impl TrackerConfig {
    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn with_voice(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    /// `units` time-units, `None` when that overflows or exceeds the
    /// longest interval a timer accepts.
    fn interval(&self, units: u32) -> Option<Duration> {
        self.time_unit
            .checked_mul(units)
            .filter(|interval| *interval <= MAX_TIMER_INTERVAL)
    }

    /// Bounded by `MAX_TIMER_INTERVAL`, even for configs that skipped
    /// validation.
    pub fn status_interval(&self) -> Duration {
        self.interval(self.status_interval_units)
            .unwrap_or(MAX_TIMER_INTERVAL)
    }

    pub fn movement_interval(&self) -> Duration {
        self.interval(self.movement_interval_units)
            .unwrap_or(MAX_TIMER_INTERVAL)
    }

    /// Defaults overridden by the `TRACKING_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overridden_by(|key| env::var(key).ok())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(raw)?;
        config.checked()
    }

    /// Applies the overrides `lookup` knows about on top of `self`.
    pub fn overridden_by<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TIME_UNIT_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: TIME_UNIT_VAR,
                value: raw.clone(),
            })?;
            self.time_unit = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(VOICE_VAR) {
            self.voice_enabled = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: VOICE_VAR,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(LOCALE_VAR) {
            self.locale = raw.parse()?;
        }
        if let Some(raw) = lookup(LOCATION_VAR) {
            self.location_enabled = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: LOCATION_VAR,
                value: raw.clone(),
            })?;
        }
        self.checked()
    }

    /// Intervals must be non-zero for the timers to make progress, and short
    /// enough to be scheduled at all.
    fn checked(self) -> Result<Self, ConfigError> {
        if self.time_unit.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: TIME_UNIT_VAR,
                value: "0".to_string(),
            });
        }
        if self.status_interval_units == 0 {
            return Err(ConfigError::InvalidValue {
                key: "status_interval_units",
                value: "0".to_string(),
            });
        }
        if self.movement_interval_units == 0 {
            return Err(ConfigError::InvalidValue {
                key: "movement_interval_units",
                value: "0".to_string(),
            });
        }
        if self.interval(self.status_interval_units).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "status_interval_units",
                value: format!(
                    "{} x {:?}",
                    self.status_interval_units, self.time_unit
                ),
            });
        }
        if self.interval(self.movement_interval_units).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "movement_interval_units",
                value: format!(
                    "{} x {:?}",
                    self.movement_interval_units, self.time_unit
                ),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_reference_timing() {
        let config = TrackerConfig::default();
        assert_eq!(config.status_interval(), Duration::from_secs(5));
        assert_eq!(config.movement_interval(), Duration::from_secs(1));
        assert!(!config.voice_enabled);
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = TrackerConfig::default()
            .overridden_by(lookup_from(&[
                (TIME_UNIT_VAR, "20"),
                (VOICE_VAR, "yes"),
                (LOCALE_VAR, "ur"),
            ]))
            .unwrap();
        assert_eq!(config.status_interval(), Duration::from_millis(100));
        assert!(config.voice_enabled);
        assert_eq!(config.locale, Locale::Ur);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = TrackerConfig::default()
            .overridden_by(lookup_from(&[(TIME_UNIT_VAR, "fast")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: TIME_UNIT_VAR, .. }));

        let err = TrackerConfig::default()
            .overridden_by(lookup_from(&[(VOICE_VAR, "loud")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: VOICE_VAR, .. }));
    }

    #[test]
    fn rejects_a_zero_time_unit() {
        let err = TrackerConfig::default()
            .overridden_by(lookup_from(&[(TIME_UNIT_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_intervals_that_overflow() {
        let err = TrackerConfig::from_json(
            r#"{"time_unit": 18446744073709551615, "status_interval_units": 4294967295}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "status_interval_units",
                ..
            }
        ));
    }

    #[test]
    fn rejects_intervals_too_long_to_schedule() {
        let err = TrackerConfig::default()
            .overridden_by(lookup_from(&[(TIME_UNIT_VAR, "18446744073709551615")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn unchecked_intervals_are_capped_instead_of_panicking() {
        let config = TrackerConfig {
            time_unit: Duration::MAX,
            status_interval_units: u32::MAX,
            ..TrackerConfig::default()
        };
        assert_eq!(config.status_interval(), MAX_TIMER_INTERVAL);
        assert_eq!(config.movement_interval(), MAX_TIMER_INTERVAL);
    }

    #[test]
    fn location_can_be_switched_off() {
        let config = TrackerConfig::default()
            .overridden_by(lookup_from(&[(LOCATION_VAR, "off")]))
            .unwrap();
        assert!(!config.location_enabled);
        assert!(TrackerConfig::default().location_enabled);
    }

    #[test]
    fn reads_durations_as_milliseconds_from_json() {
        let config =
            TrackerConfig::from_json(r#"{"time_unit": 250, "voice_enabled": true}"#).unwrap();
        assert_eq!(config.time_unit, Duration::from_millis(250));
        assert_eq!(config.status_interval_units, STATUS_INTERVAL_UNITS);
        assert!(config.voice_enabled);

        assert!(matches!(
            TrackerConfig::from_json("{not json"),
            Err(ConfigError::Malformed(_))
        ));
    }
}

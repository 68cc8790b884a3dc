//! Stopwatch configuration.

use crate::time_value::TimeValue;
use crate::types::{HourLimit, Mode};

/// Errors from [`ConfigBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The initial time lies outside the range the hour limit can count through.
    InitialTimeOutOfRange {
        /// Hours of the rejected initial time
        hours: u8,
        /// The configured hour limit
        limit: HourLimit,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InitialTimeOutOfRange { hours, limit } => {
                write!(f, "initial hours {} out of range for {:?}", hours, limit)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime configuration applied when a [`Stopwatch`](crate::Stopwatch) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchConfig {
    /// How the hours field behaves at its upper bound.
    pub hour_limit: HourLimit,
    /// Mode at power-on.
    pub initial_mode: Mode,
    /// Time at power-on.
    pub initial_time: TimeValue,
    /// Arm the tick source immediately at power-on.
    pub start_running: bool,
    /// Reset while running also pauses.
    ///
    /// When `false`, a running count-down that is reset stays `Running` and
    /// expires again on the next tick.
    pub pause_on_reset: bool,
}

impl StopwatchConfig {
    /// Creates a configuration builder starting from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            hour_limit: HourLimit::Hundred,
            initial_mode: Mode::CountUp,
            initial_time: TimeValue::ZERO,
            start_running: true,
            pause_on_reset: false,
        }
    }
}

/// Builder for [`StopwatchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: StopwatchConfig,
}

impl ConfigBuilder {
    /// Creates a builder holding [`StopwatchConfig::default`].
    pub fn new() -> Self {
        Self {
            config: StopwatchConfig::default(),
        }
    }

    /// Default is [`HourLimit::Hundred`].
    pub fn hour_limit(mut self, limit: HourLimit) -> Self {
        self.config.hour_limit = limit;
        self
    }

    /// Default is [`Mode::CountUp`].
    pub fn initial_mode(mut self, mode: Mode) -> Self {
        self.config.initial_mode = mode;
        self
    }

    /// Default is `00:00:00`.
    pub fn initial_time(mut self, time: TimeValue) -> Self {
        self.config.initial_time = time;
        self
    }

    /// Default is `true`.
    pub fn start_running(mut self, running: bool) -> Self {
        self.config.start_running = running;
        self
    }

    /// Default is `false`.
    pub fn pause_on_reset(mut self, pause: bool) -> Self {
        self.config.pause_on_reset = pause;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// `InitialTimeOutOfRange` if the limit is [`HourLimit::Day`] and the
    /// initial time is past `23:59:59`.
    pub fn build(self) -> Result<StopwatchConfig, ConfigError> {
        let hours = self.config.initial_time.hours();
        if self.config.hour_limit == HourLimit::Day && hours > 23 {
            return Err(ConfigError::InitialTimeOutOfRange {
                hours,
                limit: self.config.hour_limit,
            });
        }

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u8, m: u8, s: u8) -> TimeValue {
        TimeValue::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn day_limit_rejects_initial_time_past_midnight() {
        let result = StopwatchConfig::builder()
            .hour_limit(HourLimit::Day)
            .initial_time(hms(30, 59, 59))
            .build();
        assert_eq!(
            result,
            Err(ConfigError::InitialTimeOutOfRange {
                hours: 30,
                limit: HourLimit::Day,
            })
        );

        let result = StopwatchConfig::builder()
            .hour_limit(HourLimit::Day)
            .initial_time(hms(24, 0, 0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn day_limit_accepts_last_second_of_day() {
        let config = StopwatchConfig::builder()
            .hour_limit(HourLimit::Day)
            .initial_time(hms(23, 59, 59))
            .build()
            .unwrap();
        assert_eq!(config.initial_time, hms(23, 59, 59));
    }

    #[test]
    fn other_limits_accept_any_initial_time() {
        for limit in [HourLimit::Hundred, HourLimit::Saturate] {
            let config = StopwatchConfig::builder()
                .hour_limit(limit)
                .initial_time(TimeValue::MAX)
                .build()
                .unwrap();
            assert_eq!(config.initial_time, TimeValue::MAX);
        }
    }

    #[test]
    fn builder_defaults_match_default_config() {
        assert_eq!(
            StopwatchConfig::builder().build(),
            Ok(StopwatchConfig::default())
        );
    }
}

//! Shared test infrastructure for bcd-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use bcd_stopwatch::{
    AlarmOutput, DigitDriver, DigitPosition, Stopwatch, StopwatchConfig, TickSource, TimeDuration,
    TimeInstant, TimeSource, TimeValue,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

/// Mock periodic timer that records arm/disarm calls
#[derive(Debug, Default)]
pub struct MockTickSource {
    pub armed: bool,
    pub arm_count: u32,
    pub disarm_count: u32,
}

impl TickSource for MockTickSource {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.disarm_count += 1;
    }
}

/// Mock buzzer that records every level written
#[derive(Debug, Default)]
pub struct MockAlarm {
    pub active: bool,
    pub history: heapless::Vec<bool, 32>,
}

impl AlarmOutput for MockAlarm {
    fn set_alarm(&mut self, active: bool) {
        self.active = active;
        let _ = self.history.push(active);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    Enable(DigitPosition, u8),
    Disable(DigitPosition),
}

/// Mock digit driver that records enable/disable calls
pub struct MockDigitDriver {
    pub events: heapless::Vec<DriverEvent, 64>,
    pub lit: Option<DigitPosition>,
}

impl MockDigitDriver {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            lit: None,
        }
    }

    /// Values passed to `enable`, in order
    pub fn shown_values(&self) -> heapless::Vec<u8, 64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DriverEvent::Enable(_, value) => Some(*value),
                DriverEvent::Disable(_) => None,
            })
            .collect()
    }
}

impl DigitDriver for MockDigitDriver {
    fn enable(&mut self, position: DigitPosition, value: u8) {
        assert!(self.lit.is_none(), "two digits lit at once");
        self.lit = Some(position);
        let _ = self.events.push(DriverEvent::Enable(position, value));
    }

    fn disable(&mut self, position: DigitPosition) {
        assert_eq!(self.lit, Some(position));
        self.lit = None;
        let _ = self.events.push(DriverEvent::Disable(position));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestStopwatch = Stopwatch<MockTickSource, MockAlarm>;

pub fn stopwatch(config: StopwatchConfig) -> TestStopwatch {
    Stopwatch::new(MockTickSource::default(), MockAlarm::default(), config)
}

pub fn hms(hours: u8, minutes: u8, seconds: u8) -> TimeValue {
    TimeValue::from_hms(hours, minutes, seconds).unwrap()
}

/// Running count-down starting at the given time
pub fn countdown_from(time: TimeValue) -> TestStopwatch {
    stopwatch(
        StopwatchConfig::builder()
            .initial_mode(bcd_stopwatch::Mode::CountDown)
            .initial_time(time)
            .build()
            .unwrap(),
    )
}

/// True if every digit is within its position's bound
pub fn digits_in_bounds(digits: [u8; 6]) -> bool {
    DigitPosition::ALL
        .iter()
        .all(|&p| digits[p.index()] <= p.max_value())
}

impl MockTimeSource {
    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

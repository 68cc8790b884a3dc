//! Non-blocking scan of a six-digit multiplexed display.
//!
//! Provides [`DisplayMultiplexer`], which lights one digit at a time for a
//! settle period and moves on without ever sleeping, and the [`DigitDriver`]
//! trait for the segment/enable hardware. A frame's digits are copied once,
//! up front, so the stopwatch lock is never held while hardware is driven.

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{DigitPosition, Mode, RunState};

/// Trait for abstracting the digit-select and BCD segment lines.
pub trait DigitDriver {
    /// Puts `value` (0-9) on the segment lines and enables `position`.
    fn enable(&mut self, position: DigitPosition, value: u8);

    /// Disables `position`.
    fn disable(&mut self, position: DigitPosition);
}

/// Everything a display refresh needs, copied out in one serialized read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySnapshot {
    /// Digits in display order, hour tens first.
    pub digits: [u8; 6],
    pub mode: Mode,
    pub state: RunState,
    /// Expiry alarm asserted.
    pub alarm: bool,
}

impl DisplaySnapshot {
    /// Value shown at `position`.
    #[inline]
    pub fn digit(&self, position: DigitPosition) -> u8 {
        self.digits[position.index()]
    }
}

impl Default for DisplaySnapshot {
    fn default() -> Self {
        Self {
            digits: [0; 6],
            mode: Mode::CountUp,
            state: RunState::Paused,
            alarm: false,
        }
    }
}

/// Timing information returned by [`DisplayMultiplexer::service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanTiming<D> {
    /// A digit is lit. Service again after this delay.
    Delay(D),

    /// The last digit was just released. The next call starts a new frame
    /// and takes a fresh snapshot.
    FrameComplete,
}

/// Drives a six-digit multiplexed display from stopwatch snapshots.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `D` - Digit driver implementation type
/// * `T` - Time source implementation type
pub struct DisplayMultiplexer<'t, I: TimeInstant, D: DigitDriver, T: TimeSource<I>> {
    driver: D,
    time_source: &'t T,
    settle: I::Duration,
    frame: DisplaySnapshot,
    position: usize,
    lit_since: Option<I>,
}

impl<'t, I: TimeInstant, D: DigitDriver, T: TimeSource<I>> DisplayMultiplexer<'t, I, D, T> {
    /// Creates a multiplexer with all digits off.
    ///
    /// # Arguments
    /// * `settle` - How long each digit stays lit (2 ms gives ~83 Hz for six digits).
    ///   Compared at the full resolution of the duration type.
    pub fn new(driver: D, time_source: &'t T, settle: I::Duration) -> Self {
        Self {
            driver,
            time_source,
            settle,
            frame: DisplaySnapshot::default(),
            position: 0,
            lit_since: None,
        }
    }

    /// Advances the scan without blocking.
    ///
    /// `next_frame` is invoked only when a new frame begins, exactly once per
    /// frame, to copy the digits that will be shown.
    ///
    /// # Returns
    /// * `ScanTiming::Delay(d)` - A digit is lit; call again after `d`
    /// * `ScanTiming::FrameComplete` - All six digits were shown
    pub fn service<F>(&mut self, next_frame: F) -> ScanTiming<I::Duration>
    where
        F: FnOnce() -> DisplaySnapshot,
    {
        let Some(lit_since) = self.lit_since else {
            if self.position == 0 {
                self.frame = next_frame();
            }
            self.light_current();
            return ScanTiming::Delay(self.settle);
        };

        let elapsed = self.time_source.now().duration_since(lit_since);
        let remaining = self.settle.saturating_sub(elapsed);
        if remaining != I::Duration::ZERO {
            return ScanTiming::Delay(remaining);
        }

        self.driver.disable(DigitPosition::ALL[self.position]);
        self.lit_since = None;
        self.position += 1;

        if self.position == DigitPosition::ALL.len() {
            self.position = 0;
            return ScanTiming::FrameComplete;
        }

        self.light_current();
        ScanTiming::Delay(self.settle)
    }

    fn light_current(&mut self) {
        let position = DigitPosition::ALL[self.position];
        self.driver.enable(position, self.frame.digit(position));
        self.lit_since = Some(self.time_source.now());
    }

    /// Turns off any lit digit and restarts from the first position.
    pub fn blank(&mut self) {
        if self.lit_since.take().is_some() {
            self.driver.disable(DigitPosition::ALL[self.position]);
        }
        self.position = 0;
    }

    /// The digit currently lit, if any.
    pub fn lit_position(&self) -> Option<DigitPosition> {
        self.lit_since.map(|_| DigitPosition::ALL[self.position])
    }

    /// The snapshot being shown in the current frame.
    pub fn frame(&self) -> &DisplaySnapshot {
        &self.frame
    }

    /// The digit driver implementation.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

//! Critical-section guarded stopwatch for interrupt-driven firmware.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::command::ControlEvent;
use crate::display::DisplaySnapshot;
use crate::stopwatch::{AlarmOutput, Stopwatch, TickOutcome, TickSource};
use crate::types::{Adjustment, StopwatchError};

/// A [`Stopwatch`] shared between interrupt handlers and the main loop.
///
/// Each method runs one whole transaction inside a single critical section,
/// so a carry chain started by a tick can never interleave with a reset, an
/// adjustment or a display snapshot. Declare it as a `static` and
/// [`install`](Self::install) the stopwatch once the hardware is set up:
///
/// ```ignore
/// static STOPWATCH: SharedStopwatch<Timer1, Buzzer> = SharedStopwatch::new();
///
/// #[interrupt]
/// fn TIMER1_COMPA() {
///     let _ = STOPWATCH.apply_tick();
/// }
/// ```
pub struct SharedStopwatch<T: TickSource, A: AlarmOutput> {
    inner: Mutex<RefCell<Option<Stopwatch<T, A>>>>,
}

impl<T: TickSource, A: AlarmOutput> SharedStopwatch<T, A> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Places `stopwatch` in the slot, returning any previous one.
    pub fn install(&self, stopwatch: Stopwatch<T, A>) -> Option<Stopwatch<T, A>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(stopwatch))
    }

    /// Removes the stopwatch from the slot.
    pub fn take(&self) -> Option<Stopwatch<T, A>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Runs `f` on the stopwatch inside one critical section.
    ///
    /// # Errors
    /// `NotInstalled` if the slot is empty.
    pub fn with<R>(&self, f: impl FnOnce(&mut Stopwatch<T, A>) -> R) -> Result<R, StopwatchError> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            let stopwatch = slot.as_mut().ok_or(StopwatchError::NotInstalled)?;
            Ok(f(stopwatch))
        })
    }

    /// See [`Stopwatch::apply_tick`].
    pub fn apply_tick(&self) -> Result<TickOutcome, StopwatchError> {
        self.with(|sw| sw.apply_tick())
    }

    /// See [`Stopwatch::apply_event`].
    pub fn apply_event(&self, event: ControlEvent) -> Result<(), StopwatchError> {
        self.with(|sw| sw.apply_event(event))?
    }

    /// See [`Stopwatch::apply_adjustment`].
    pub fn apply_adjustment(&self, adjustment: Adjustment) -> Result<(), StopwatchError> {
        self.with(|sw| sw.apply_adjustment(adjustment))
    }

    /// See [`Stopwatch::snapshot_for_display`].
    pub fn snapshot_for_display(&self) -> Result<DisplaySnapshot, StopwatchError> {
        self.with(|sw| sw.snapshot_for_display())
    }
}

impl<T: TickSource, A: AlarmOutput> Default for SharedStopwatch<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

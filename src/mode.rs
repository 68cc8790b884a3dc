//! Count direction state and the debounced mode button.

use crate::command::ControlEvent;
use crate::debounce::EdgeLatch;
use crate::types::Mode;

/// Holds the current counting direction.
///
/// Toggling is only ever requested through [`ControlEvent::ToggleMode`]; the
/// owning [`Stopwatch`](crate::Stopwatch) also silences the alarm whenever the
/// mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Creates a controller starting in `mode`.
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Flips between count-up and count-down, returning the new mode.
    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// The current mode.
    #[inline]
    pub fn current(&self) -> Mode {
        self.mode
    }
}

/// Polled mode-toggle button.
///
/// Lives with the main loop, not with the shared stopwatch state: it turns a
/// raw button level into at most one [`ControlEvent::ToggleMode`] per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeButton {
    latch: EdgeLatch,
}

impl ModeButton {
    /// Creates a button that is not held.
    pub const fn new() -> Self {
        Self {
            latch: EdgeLatch::new(),
        }
    }

    /// Samples the button once.
    pub fn poll(&mut self, pressed: bool) -> Option<ControlEvent> {
        self.latch.update(pressed).then_some(ControlEvent::ToggleMode)
    }
}

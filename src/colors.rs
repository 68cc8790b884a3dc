//! Indicator colors for boards with an RGB status LED.
//!
//! Two-LED boards use [`Mode::indicator_levels`] instead; these colors match
//! those LEDs (red for count-up, yellow for count-down).

use palette::Srgb;

use crate::display::DisplaySnapshot;
use crate::types::Mode;

pub const COUNT_UP: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const COUNT_DOWN: Srgb = Srgb::new(1.0, 1.0, 0.0);
/// Shown while the expiry alarm is asserted.
pub const ALARM: Srgb = Srgb::new(1.0, 1.0, 1.0);

impl Mode {
    /// Status LED color for this mode.
    #[inline]
    pub fn indicator_color(self) -> Srgb {
        match self {
            Mode::CountUp => COUNT_UP,
            Mode::CountDown => COUNT_DOWN,
        }
    }
}

impl DisplaySnapshot {
    /// Status LED color for this snapshot: the alarm color overrides the mode.
    pub fn indicator_color(&self) -> Srgb {
        if self.alarm {
            ALARM
        } else {
            self.mode.indicator_color()
        }
    }
}

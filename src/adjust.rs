//! Debounced manual adjustment of the seconds, minutes and hours fields.

use crate::debounce::EdgeLatch;
use crate::types::{Adjustment, Direction, Field};
use heapless::Vec;

/// Sampled levels of the six adjustment buttons (`true` = pressed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdjustButtons {
    pub seconds_down: bool,
    pub seconds_up: bool,
    pub minutes_down: bool,
    pub minutes_up: bool,
    pub hours_down: bool,
    pub hours_up: bool,
}

impl AdjustButtons {
    /// All buttons released.
    pub const RELEASED: Self = Self {
        seconds_down: false,
        seconds_up: false,
        minutes_down: false,
        minutes_up: false,
        hours_down: false,
        hours_up: false,
    };

    /// Only the button for `adjustment` pressed.
    pub fn only(adjustment: Adjustment) -> Self {
        let mut buttons = Self::RELEASED;
        *buttons.level_mut(adjustment) = true;
        buttons
    }

    fn levels(&self) -> [bool; 6] {
        [
            self.seconds_down,
            self.seconds_up,
            self.minutes_down,
            self.minutes_up,
            self.hours_down,
            self.hours_up,
        ]
    }

    fn level_mut(&mut self, adjustment: Adjustment) -> &mut bool {
        match (adjustment.field, adjustment.direction) {
            (Field::Seconds, Direction::Decrement) => &mut self.seconds_down,
            (Field::Seconds, Direction::Increment) => &mut self.seconds_up,
            (Field::Minutes, Direction::Decrement) => &mut self.minutes_down,
            (Field::Minutes, Direction::Increment) => &mut self.minutes_up,
            (Field::Hours, Direction::Decrement) => &mut self.hours_down,
            (Field::Hours, Direction::Increment) => &mut self.hours_up,
        }
    }
}

/// Button-to-adjustment mapping, in polling order.
const BUTTON_MAP: [Adjustment; 6] = [
    Adjustment::new(Field::Seconds, Direction::Decrement),
    Adjustment::new(Field::Seconds, Direction::Increment),
    Adjustment::new(Field::Minutes, Direction::Decrement),
    Adjustment::new(Field::Minutes, Direction::Increment),
    Adjustment::new(Field::Hours, Direction::Decrement),
    Adjustment::new(Field::Hours, Direction::Increment),
];

/// Converts polled adjustment buttons into discrete [`Adjustment`]s.
///
/// Each button has its own [`EdgeLatch`], so one press-release cycle yields
/// exactly one adjustment no matter how often the main loop polls. The
/// controller holds no time state itself; the returned adjustments are applied
/// through [`Stopwatch::apply_adjustment`](crate::Stopwatch::apply_adjustment)
/// or posted to an [`EventQueue`](crate::EventQueue).
#[derive(Debug, Clone, Default)]
pub struct AdjustmentController {
    latches: [EdgeLatch; 6],
}

impl AdjustmentController {
    /// Creates a controller with every button released.
    pub const fn new() -> Self {
        Self {
            latches: [EdgeLatch::new(); 6],
        }
    }

    /// Samples all six buttons once and returns the adjustments whose press
    /// began on this poll.
    pub fn poll(&mut self, buttons: AdjustButtons) -> Vec<Adjustment, 6> {
        let mut pending = Vec::new();

        for ((latch, pressed), adjustment) in self
            .latches
            .iter_mut()
            .zip(buttons.levels())
            .zip(BUTTON_MAP)
        {
            if latch.update(pressed) {
                // At most one entry per button, capacity is exactly six.
                let _ = pending.push(adjustment);
            }
        }

        pending
    }

    /// Whether the button for `adjustment` is currently latched.
    pub fn is_held(&self, adjustment: Adjustment) -> bool {
        BUTTON_MAP
            .iter()
            .position(|&a| a == adjustment)
            .is_some_and(|idx| self.latches[idx].is_held())
    }
}

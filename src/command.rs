//! Tagged events for driving a stopwatch.

use crate::types::Adjustment;

/// Asynchronous control events from the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Zero the time and silence the alarm.
    Reset,
    /// Halt the tick source.
    Pause,
    /// Re-arm the tick source.
    Resume,
    /// Switch between count-up and count-down.
    ToggleMode,
}

/// Anything that can mutate the stopwatch, as posted to an [`EventQueue`](crate::EventQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchCommand {
    /// One period of the 1 Hz tick source elapsed.
    Tick,
    /// A control event.
    Control(ControlEvent),
    /// A manual field adjustment.
    Adjust(Adjustment),
}

impl From<ControlEvent> for StopwatchCommand {
    fn from(event: ControlEvent) -> Self {
        StopwatchCommand::Control(event)
    }
}

impl From<Adjustment> for StopwatchCommand {
    fn from(adjustment: Adjustment) -> Self {
        StopwatchCommand::Adjust(adjustment)
    }
}

//! Core types shared by the stopwatch state machine.

/// Counting direction applied on every clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Elapsed time: each tick adds one second.
    #[default]
    CountUp,

    /// Remaining time: each tick removes one second until zero.
    CountDown,
}

impl Mode {
    /// Returns the opposite mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::CountUp => Mode::CountDown,
            Mode::CountDown => Mode::CountUp,
        }
    }

    /// Levels for a two-LED mode indicator as `(count_up_led, count_down_led)`.
    #[inline]
    pub fn indicator_levels(self) -> (bool, bool) {
        match self {
            Mode::CountUp => (true, false),
            Mode::CountDown => (false, true),
        }
    }
}

/// Whether the clock tick is currently being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Tick source armed, time advances once per tick.
    Running,
    /// Tick source halted by the user.
    Paused,
    /// Count-down reached zero. Tick source halted and alarm asserted.
    Expired,
}

/// A two-digit unit of the displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Seconds,
    Minutes,
    Hours,
}

/// Direction of a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Increment,
    Decrement,
}

/// A single manual field adjustment produced by one button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjustment {
    pub field: Field,
    pub direction: Direction,
}

impl Adjustment {
    /// Creates an adjustment.
    #[inline]
    pub const fn new(field: Field, direction: Direction) -> Self {
        Self { field, direction }
    }
}

/// Upper bound policy for the hours field.
///
/// Two BCD hour digits cannot represent more than 99 hours, so counting up
/// past the limit either wraps or holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourLimit {
    /// `99:59:59` rolls over to `00:00:00`.
    #[default]
    Hundred,

    /// 24-hour clock: `23:59:59` rolls over to `00:00:00`.
    Day,

    /// Counting up holds at `99:59:59`.
    Saturate,
}

/// Physical digit positions in display order, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
    SecondTens,
    SecondOnes,
}

impl DigitPosition {
    /// All positions in scan order.
    pub const ALL: [DigitPosition; 6] = [
        DigitPosition::HourTens,
        DigitPosition::HourOnes,
        DigitPosition::MinuteTens,
        DigitPosition::MinuteOnes,
        DigitPosition::SecondTens,
        DigitPosition::SecondOnes,
    ];

    /// Index of this position within [`DigitPosition::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Largest value this digit may hold.
    #[inline]
    pub const fn max_value(self) -> u8 {
        match self {
            DigitPosition::MinuteTens | DigitPosition::SecondTens => 5,
            _ => 9,
        }
    }
}

/// Errors that can occur when driving the stopwatch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchError {
    /// Operation not allowed in the current run state.
    InvalidState {
        /// Human-readable description of the accepted state(s)
        expected: &'static str,
        /// The actual current state
        actual: RunState,
    },

    /// Event queue is full and the command was dropped.
    QueueFull,

    /// No stopwatch has been installed in the shared slot yet.
    NotInstalled,
}

impl core::fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StopwatchError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but stopwatch is {:?}",
                    expected, actual
                )
            }
            StopwatchError::QueueFull => write!(f, "event queue is full"),
            StopwatchError::NotInstalled => write!(f, "no stopwatch installed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StopwatchError {}

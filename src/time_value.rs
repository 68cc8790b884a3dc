//! Six-digit BCD time value with carry and borrow arithmetic.
//!
//! [`TimeValue`] stores hours, minutes and seconds as six independent decimal
//! digits, exactly as they are shown on a six-position seven-segment display.
//! Tens-of-minutes and tens-of-seconds digits range `0..=5`; every other digit
//! ranges `0..=9`. All operations are pure mutations of the six digits.

use crate::types::{DigitPosition, Direction, Field, HourLimit};

/// Errors from constructing a [`TimeValue`] out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeValueError {
    /// A digit is larger than its position allows.
    DigitOutOfRange { position: DigitPosition, value: u8 },
}

impl core::fmt::Display for TimeValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeValueError::DigitOutOfRange { position, value } => {
                write!(
                    f,
                    "digit {} out of range for {:?} (max {})",
                    value,
                    position,
                    position.max_value()
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeValueError {}

/// Hours, minutes and seconds held as six BCD digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    sec_ones: u8,
    sec_tens: u8,
    min_ones: u8,
    min_tens: u8,
    hour_ones: u8,
    hour_tens: u8,
}

impl TimeValue {
    /// `00:00:00`.
    pub const ZERO: Self = Self {
        sec_ones: 0,
        sec_tens: 0,
        min_ones: 0,
        min_tens: 0,
        hour_ones: 0,
        hour_tens: 0,
    };

    /// `99:59:59`, the largest representable value.
    pub const MAX: Self = Self {
        sec_ones: 9,
        sec_tens: 5,
        min_ones: 9,
        min_tens: 5,
        hour_ones: 9,
        hour_tens: 9,
    };

    /// Builds a value from digits in display order
    /// (hour tens, hour ones, minute tens, minute ones, second tens, second ones).
    ///
    /// # Errors
    /// `DigitOutOfRange` if any digit exceeds its position's bound.
    pub fn from_digits(digits: [u8; 6]) -> Result<Self, TimeValueError> {
        for position in DigitPosition::ALL {
            let value = digits[position.index()];
            if value > position.max_value() {
                return Err(TimeValueError::DigitOutOfRange { position, value });
            }
        }

        Ok(Self {
            hour_tens: digits[0],
            hour_ones: digits[1],
            min_tens: digits[2],
            min_ones: digits[3],
            sec_tens: digits[4],
            sec_ones: digits[5],
        })
    }

    /// Builds a value from hours (`0..=99`), minutes and seconds (`0..=59`).
    ///
    /// # Errors
    /// `DigitOutOfRange` naming the tens digit of the offending field.
    pub fn from_hms(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeValueError> {
        if hours > 99 {
            return Err(TimeValueError::DigitOutOfRange {
                position: DigitPosition::HourTens,
                value: hours / 10,
            });
        }

        Self::from_digits([
            hours / 10,
            hours % 10,
            minutes / 10,
            minutes % 10,
            seconds / 10,
            seconds % 10,
        ])
    }

    /// Digits in display order, hour tens first.
    #[inline]
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hour_tens,
            self.hour_ones,
            self.min_tens,
            self.min_ones,
            self.sec_tens,
            self.sec_ones,
        ]
    }

    /// Value of a single digit.
    #[inline]
    pub fn digit(&self, position: DigitPosition) -> u8 {
        self.digits()[position.index()]
    }

    #[inline]
    pub fn hours(&self) -> u8 {
        self.hour_tens * 10 + self.hour_ones
    }

    #[inline]
    pub fn minutes(&self) -> u8 {
        self.min_tens * 10 + self.min_ones
    }

    #[inline]
    pub fn seconds(&self) -> u8 {
        self.sec_tens * 10 + self.sec_ones
    }

    /// Whole duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.hours() as u32 * 3600 + self.minutes() as u32 * 60 + self.seconds() as u32
    }

    /// True iff all six digits are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Sets all six digits to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    /// Adds one second, carrying through every digit.
    ///
    /// Hour tens wraps at 10, so `99:59:59` becomes `00:00:00`.
    pub fn increment(&mut self) {
        self.sec_ones += 1;
        if self.sec_ones < 10 {
            return;
        }
        self.sec_ones = 0;

        self.sec_tens += 1;
        if self.sec_tens < 6 {
            return;
        }
        self.sec_tens = 0;

        self.min_ones += 1;
        if self.min_ones < 10 {
            return;
        }
        self.min_ones = 0;

        self.min_tens += 1;
        if self.min_tens < 6 {
            return;
        }
        self.min_tens = 0;

        self.hour_ones += 1;
        if self.hour_ones < 10 {
            return;
        }
        self.hour_ones = 0;

        self.hour_tens = (self.hour_tens + 1) % 10;
    }

    /// Adds one second, applying an hour limit policy.
    pub fn increment_within(&mut self, limit: HourLimit) {
        match limit {
            HourLimit::Hundred => self.increment(),
            HourLimit::Saturate => {
                if *self != Self::MAX {
                    self.increment();
                }
            }
            HourLimit::Day => {
                self.increment();
                if self.hours() == 24 {
                    self.hour_tens = 0;
                    self.hour_ones = 0;
                }
            }
        }
    }

    /// Subtracts one second, borrowing through every digit.
    ///
    /// Must not be used to go below zero: on `00:00:00` the value is left
    /// untouched and `false` is returned.
    pub fn decrement(&mut self) -> bool {
        if self.is_zero() {
            return false;
        }

        if self.sec_ones > 0 {
            self.sec_ones -= 1;
            return true;
        }
        self.sec_ones = 9;

        if self.sec_tens > 0 {
            self.sec_tens -= 1;
            return true;
        }
        self.sec_tens = 5;

        if self.min_ones > 0 {
            self.min_ones -= 1;
            return true;
        }
        self.min_ones = 9;

        if self.min_tens > 0 {
            self.min_tens -= 1;
            return true;
        }
        self.min_tens = 5;

        if self.hour_ones > 0 {
            self.hour_ones -= 1;
            return true;
        }
        self.hour_ones = 9;

        // Non-zero value with everything below exhausted: hour tens is at least 1.
        self.hour_tens -= 1;
        true
    }

    /// Manually steps the ones digit of one field.
    ///
    /// Unlike [`increment`](Self::increment) the change never cascades past the
    /// field's own tens digit:
    /// - increment: ones wraps `9 → 0` and bumps tens; tens wraps to 0 at its
    ///   modulus (6 for minutes/seconds, 10 for hours).
    /// - decrement: ones wraps `0 → 9` and tens is lowered only if above 0.
    pub fn bump_field(&mut self, field: Field, direction: Direction) {
        let tens_modulus = match field {
            Field::Seconds | Field::Minutes => 6,
            Field::Hours => 10,
        };

        let (ones, tens) = match field {
            Field::Seconds => (&mut self.sec_ones, &mut self.sec_tens),
            Field::Minutes => (&mut self.min_ones, &mut self.min_tens),
            Field::Hours => (&mut self.hour_ones, &mut self.hour_tens),
        };

        match direction {
            Direction::Increment => {
                *ones += 1;
                if *ones == 10 {
                    *ones = 0;
                    *tens += 1;
                    if *tens == tens_modulus {
                        *tens = 0;
                    }
                }
            }
            Direction::Decrement => {
                if *ones == 0 {
                    *ones = 9;
                    if *tens > 0 {
                        *tens -= 1;
                    }
                } else {
                    *ones -= 1;
                }
            }
        }
    }

    /// [`bump_field`](Self::bump_field) with an hour limit policy.
    ///
    /// Under [`HourLimit::Day`] incrementing hours past 23 wraps to 00.
    pub fn bump_field_within(&mut self, field: Field, direction: Direction, limit: HourLimit) {
        self.bump_field(field, direction);

        if limit == HourLimit::Day
            && field == Field::Hours
            && direction == Direction::Increment
            && self.hours() > 23
        {
            self.hour_tens = 0;
            self.hour_ones = 0;
        }
    }
}

impl core::fmt::Display for TimeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{}:{}{}:{}{}",
            self.hour_tens, self.hour_ones, self.min_tens, self.min_ones, self.sec_tens, self.sec_ones
        )
    }
}

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeValue`**: Six BCD digits (`HH:MM:SS`) with carry/borrow arithmetic
//! - **`Stopwatch`**: Owns time, mode and run state; mutated only through transactions
//! - **`TickSource`** / **`AlarmOutput`**: Traits to implement for your timer and buzzer
//! - **`ControlEvent`** / **`StopwatchCommand`**: Tagged events posted by interrupt handlers
//! - **`SharedStopwatch`**: Critical-section guarded owner for direct use from interrupts
//! - **`EventQueue`**: Interrupt-safe queue feeding a main-loop-owned stopwatch
//! - **`AdjustmentController`** / **`ModeButton`**: Debounced polling of the front panel
//! - **`DisplayMultiplexer`**: Non-blocking six-digit scan driven through a `DigitDriver`
//! - **`TimeSource`**: Trait to implement for your timing system (used by the display scan)
//!
//! Both integration styles serialize every read-modify-write of the time value
//! with `critical-section`, so a partially carried value is never observable.

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod adjust;
pub mod colors;
pub mod command;
pub mod config;
pub mod debounce;
pub mod display;
pub mod mode;
pub mod queue;
pub mod shared;
pub mod stopwatch;
pub mod time;
pub mod time_value;
pub mod types;

pub use adjust::{AdjustButtons, AdjustmentController};
pub use command::{ControlEvent, StopwatchCommand};
pub use config::{ConfigBuilder, ConfigError, StopwatchConfig};
pub use debounce::EdgeLatch;
pub use display::{DigitDriver, DisplayMultiplexer, DisplaySnapshot, ScanTiming};
pub use mode::{ModeButton, ModeController};
pub use queue::EventQueue;
pub use shared::SharedStopwatch;
pub use stopwatch::{AlarmOutput, Stopwatch, TickOutcome, TickSource};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use time_value::{TimeValue, TimeValueError};
pub use types::{
    Adjustment, DigitPosition, Direction, Field, HourLimit, Mode, RunState, StopwatchError,
};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

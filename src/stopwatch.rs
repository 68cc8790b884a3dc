//! Stopwatch state machine with tick, event and adjustment handling.
//!
//! Provides [`Stopwatch`], the single owner of the time value, mode and run
//! state. Every mutation goes through one of its transactional methods, which
//! callers serialize either with [`SharedStopwatch`](crate::SharedStopwatch)
//! or by feeding it from an [`EventQueue`](crate::EventQueue). Also defines
//! the [`TickSource`] and [`AlarmOutput`] hardware traits.

use crate::command::{ControlEvent, StopwatchCommand};
use crate::config::StopwatchConfig;
use crate::display::DisplaySnapshot;
use crate::mode::ModeController;
use crate::time_value::TimeValue;
use crate::types::{Adjustment, Mode, RunState, StopwatchError};

/// Trait for the periodic 1 Hz trigger driving the clock.
///
/// Implement this for your hardware timer. Pausing is realized by disarming
/// the source, so no ticks accumulate while the stopwatch is halted.
pub trait TickSource {
    /// Starts (or restarts) periodic ticking.
    fn arm(&mut self);

    /// Stops periodic ticking.
    fn disarm(&mut self);
}

/// Trait for the audible/visual expiry indicator.
pub trait AlarmOutput {
    /// Drives the alarm output. Handle hardware errors internally.
    fn set_alarm(&mut self, active: bool);
}

/// What a clock tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Time moved by one second.
    Counted,
    /// Count-down was already at zero; the stopwatch is now `Expired`.
    Expired,
    /// Not running; the tick was ignored.
    Discarded,
}

/// Dual-mode BCD stopwatch.
///
/// # Type Parameters
/// * `T` - Tick source implementation type
/// * `A` - Alarm output implementation type
pub struct Stopwatch<T: TickSource, A: AlarmOutput> {
    tick_source: T,
    alarm: A,
    time: TimeValue,
    mode: ModeController,
    state: RunState,
    alarm_active: bool,
    config: StopwatchConfig,
}

impl<T: TickSource, A: AlarmOutput> Stopwatch<T, A> {
    /// Creates a stopwatch, arming or disarming the tick source per `config`
    /// and silencing the alarm.
    pub fn new(mut tick_source: T, mut alarm: A, config: StopwatchConfig) -> Self {
        alarm.set_alarm(false);

        let state = if config.start_running {
            tick_source.arm();
            RunState::Running
        } else {
            tick_source.disarm();
            RunState::Paused
        };

        Self {
            tick_source,
            alarm,
            time: config.initial_time,
            mode: ModeController::new(config.initial_mode),
            state,
            alarm_active: false,
            config,
        }
    }

    /// Dispatches a tagged command to the matching transaction.
    ///
    /// Tick outcomes are not reported here; use [`apply_tick`](Self::apply_tick)
    /// directly when they matter.
    pub fn handle(&mut self, command: StopwatchCommand) -> Result<(), StopwatchError> {
        match command {
            StopwatchCommand::Tick => {
                self.apply_tick();
                Ok(())
            }
            StopwatchCommand::Control(event) => self.apply_event(event),
            StopwatchCommand::Adjust(adjustment) => {
                self.apply_adjustment(adjustment);
                Ok(())
            }
        }
    }

    /// Applies one period of the tick source.
    ///
    /// Count-up always adds one second. Count-down removes one second, or,
    /// if the time is already zero, enters `Expired`, asserts the alarm and
    /// halts the tick source without touching the time.
    pub fn apply_tick(&mut self) -> TickOutcome {
        if self.state != RunState::Running {
            trace!("tick discarded while {}", self.state);
            return TickOutcome::Discarded;
        }

        match self.mode.current() {
            Mode::CountUp => {
                self.time.increment_within(self.config.hour_limit);
                TickOutcome::Counted
            }
            Mode::CountDown => {
                if self.time.decrement() {
                    TickOutcome::Counted
                } else {
                    self.expire();
                    TickOutcome::Expired
                }
            }
        }
    }

    /// Applies a control event.
    ///
    /// # Errors
    /// `InvalidState` for `Resume` while `Expired`; leave `Expired` with
    /// `Reset` first. `ToggleMode` silences the alarm but stays `Expired`.
    pub fn apply_event(&mut self, event: ControlEvent) -> Result<(), StopwatchError> {
        match event {
            ControlEvent::Reset => {
                self.reset();
                Ok(())
            }
            ControlEvent::Pause => {
                self.pause();
                Ok(())
            }
            ControlEvent::Resume => self.resume(),
            ControlEvent::ToggleMode => {
                self.toggle_mode();
                Ok(())
            }
        }
    }

    /// Applies a manual field adjustment. Allowed in every run state.
    pub fn apply_adjustment(&mut self, adjustment: Adjustment) {
        self.time
            .bump_field_within(adjustment.field, adjustment.direction, self.config.hour_limit);
    }

    /// Copies everything a display refresh needs in one read.
    pub fn snapshot_for_display(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            digits: self.time.digits(),
            mode: self.mode.current(),
            state: self.state,
            alarm: self.alarm_active,
        }
    }

    fn expire(&mut self) {
        info!("count-down expired");
        self.tick_source.disarm();
        self.state = RunState::Expired;
        self.set_alarm(true);
    }

    fn reset(&mut self) {
        self.time.reset();
        self.set_alarm(false);

        match self.state {
            // Tick source is already halted; wait for Resume.
            RunState::Expired => self.state = RunState::Paused,
            RunState::Running if self.config.pause_on_reset => {
                self.tick_source.disarm();
                self.state = RunState::Paused;
            }
            RunState::Running | RunState::Paused => {}
        }

        debug!("reset, now {}", self.state);
    }

    fn pause(&mut self) {
        if self.state == RunState::Running {
            self.tick_source.disarm();
            self.state = RunState::Paused;
            debug!("paused at {}", self.time);
        }
    }

    fn resume(&mut self) -> Result<(), StopwatchError> {
        match self.state {
            RunState::Running => Ok(()),
            RunState::Paused => {
                self.tick_source.arm();
                self.state = RunState::Running;
                debug!("resumed at {}", self.time);
                Ok(())
            }
            RunState::Expired => {
                warn!("resume rejected while expired");
                Err(StopwatchError::InvalidState {
                    expected: "Running or Paused",
                    actual: self.state,
                })
            }
        }
    }

    fn toggle_mode(&mut self) {
        self.mode.toggle();
        self.set_alarm(false);
        info!("mode now {}", self.mode.current());
    }

    fn set_alarm(&mut self, active: bool) {
        self.alarm.set_alarm(active);
        self.alarm_active = active;
    }

    /// Current time value.
    #[inline]
    pub fn time(&self) -> TimeValue {
        self.time
    }

    /// Current counting mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns true if the expiry alarm is asserted.
    #[inline]
    pub fn is_alarm_active(&self) -> bool {
        self.alarm_active
    }

    /// Returns true if the stopwatch is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Configuration this stopwatch was created with.
    pub fn config(&self) -> &StopwatchConfig {
        &self.config
    }

    /// The tick source implementation.
    pub fn tick_source(&self) -> &T {
        &self.tick_source
    }

    /// The alarm output implementation.
    pub fn alarm_output(&self) -> &A {
        &self.alarm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Field, HourLimit};

    #[derive(Default)]
    struct FakeTimer {
        armed: bool,
    }

    impl TickSource for FakeTimer {
        fn arm(&mut self) {
            self.armed = true;
        }

        fn disarm(&mut self) {
            self.armed = false;
        }
    }

    #[derive(Default)]
    struct FakeBuzzer {
        on: bool,
    }

    impl AlarmOutput for FakeBuzzer {
        fn set_alarm(&mut self, active: bool) {
            self.on = active;
        }
    }

    fn stopwatch(config: StopwatchConfig) -> Stopwatch<FakeTimer, FakeBuzzer> {
        Stopwatch::new(FakeTimer::default(), FakeBuzzer::default(), config)
    }

    #[test]
    fn new_arms_tick_source_when_starting_running() {
        let sw = stopwatch(StopwatchConfig::default());
        assert_eq!(sw.state(), RunState::Running);
        assert!(sw.tick_source().armed);
        assert!(!sw.alarm_output().on);
    }

    #[test]
    fn new_can_start_paused() {
        let sw = stopwatch(StopwatchConfig::builder().start_running(false).build().unwrap());
        assert_eq!(sw.state(), RunState::Paused);
        assert!(!sw.tick_source().armed);
    }

    #[test]
    fn count_up_tick_increments() {
        let mut sw = stopwatch(StopwatchConfig::default());
        assert_eq!(sw.apply_tick(), TickOutcome::Counted);
        assert_eq!(sw.time().total_seconds(), 1);
    }

    #[test]
    fn count_up_respects_hour_limit() {
        let config = StopwatchConfig::builder()
            .hour_limit(HourLimit::Saturate)
            .initial_time(TimeValue::MAX)
            .build()
            .unwrap();
        let mut sw = stopwatch(config);
        sw.apply_tick();
        assert_eq!(sw.time(), TimeValue::MAX);
    }

    #[test]
    fn count_down_expires_only_after_reaching_zero() {
        let config = StopwatchConfig::builder()
            .initial_mode(Mode::CountDown)
            .initial_time(TimeValue::from_hms(0, 0, 1).unwrap())
            .build()
            .unwrap();
        let mut sw = stopwatch(config);

        assert_eq!(sw.apply_tick(), TickOutcome::Counted);
        assert!(sw.time().is_zero());
        assert_eq!(sw.state(), RunState::Running);

        assert_eq!(sw.apply_tick(), TickOutcome::Expired);
        assert_eq!(sw.state(), RunState::Expired);
        assert!(sw.is_alarm_active());
        assert!(sw.alarm_output().on);
        assert!(!sw.tick_source().armed);

        assert_eq!(sw.apply_tick(), TickOutcome::Discarded);
        assert!(sw.time().is_zero());
    }

    #[test]
    fn toggle_while_expired_only_silences_alarm() {
        let config = StopwatchConfig::builder()
            .initial_mode(Mode::CountDown)
            .build()
            .unwrap();
        let mut sw = stopwatch(config);
        assert_eq!(sw.apply_tick(), TickOutcome::Expired);

        sw.apply_event(ControlEvent::ToggleMode).unwrap();
        assert_eq!(sw.state(), RunState::Expired);
        assert_eq!(sw.mode(), Mode::CountUp);
        assert!(!sw.is_alarm_active());
        assert!(!sw.alarm_output().on);
        assert!(!sw.tick_source().armed);

        sw.apply_event(ControlEvent::Reset).unwrap();
        assert_eq!(sw.state(), RunState::Paused);
    }

    #[test]
    fn adjustment_is_allowed_while_paused() {
        let mut sw = stopwatch(StopwatchConfig::builder().start_running(false).build().unwrap());
        sw.apply_adjustment(Adjustment::new(Field::Minutes, Direction::Increment));
        assert_eq!(sw.time().minutes(), 1);
    }

    #[test]
    fn snapshot_reflects_state() {
        let config = StopwatchConfig::builder()
            .initial_time(TimeValue::from_hms(12, 34, 56).unwrap())
            .build()
            .unwrap();
        let sw = stopwatch(config);
        let snapshot = sw.snapshot_for_display();
        assert_eq!(snapshot.digits, [1, 2, 3, 4, 5, 6]);
        assert_eq!(snapshot.mode, Mode::CountUp);
        assert_eq!(snapshot.state, RunState::Running);
        assert!(!snapshot.alarm);
    }
}

//! Interrupt-safe command queue with a single consumer.
//!
//! Interrupt handlers [`post`](EventQueue::post) tagged commands; the main
//! loop owns the [`Stopwatch`] and drains the queue with
//! [`dispatch`](EventQueue::dispatch), so the stopwatch is only ever mutated
//! from one context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::StopwatchCommand;
use crate::stopwatch::{AlarmOutput, Stopwatch, TickSource};
use crate::types::StopwatchError;

/// Fixed-capacity FIFO of [`StopwatchCommand`]s.
///
/// # Type Parameters
/// * `N` - Maximum number of pending commands
pub struct EventQueue<const N: usize> {
    pending: Mutex<RefCell<Deque<StopwatchCommand, N>>>,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Appends a command. Safe to call from interrupt context.
    ///
    /// # Errors
    /// `QueueFull` if `N` commands are already pending; the command is dropped.
    pub fn post(&self, command: impl Into<StopwatchCommand>) -> Result<(), StopwatchError> {
        let command = command.into();
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).push_back(command)).map_err(
            |_dropped| {
                warn!("event queue full, dropped {}", command);
                StopwatchError::QueueFull
            },
        )
    }

    /// Removes the oldest pending command.
    pub fn pop(&self) -> Option<StopwatchCommand> {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).pop_front())
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow_ref(cs).len())
    }

    /// Returns true if no commands are waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies pending commands to `stopwatch` in FIFO order.
    ///
    /// Each command is popped inside a short critical section and applied
    /// outside it.
    ///
    /// # Returns
    /// * `Ok(n)` - The queue was drained; `n` commands were applied
    /// * `Err` - A command was rejected; later commands stay queued for the
    ///   next call
    pub fn dispatch<T: TickSource, A: AlarmOutput>(
        &self,
        stopwatch: &mut Stopwatch<T, A>,
    ) -> Result<usize, StopwatchError> {
        let mut applied = 0;

        while let Some(command) = self.pop() {
            stopwatch.handle(command)?;
            applied += 1;
        }

        Ok(applied)
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

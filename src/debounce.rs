//! Press latch for polled buttons.

/// Turns a sampled "pressed" level into a single event per press.
///
/// The latch is set on the first poll that sees the button pressed and stays
/// set until a poll sees it released, so a button held across any number of
/// polls produces exactly one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeLatch {
    held: bool,
}

impl EdgeLatch {
    /// Creates a released latch.
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// Feeds one sample. Returns `true` only on the poll where a press begins.
    #[inline]
    pub fn update(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.held = false;
            return false;
        }

        if self.held {
            return false;
        }

        self.held = true;
        true
    }

    /// Whether the button was pressed on the last poll.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_press() {
        let mut latch = EdgeLatch::new();

        assert!(latch.update(true));
        for _ in 0..100 {
            assert!(!latch.update(true));
        }
        assert!(latch.is_held());

        assert!(!latch.update(false));
        assert!(!latch.is_held());
        assert!(latch.update(true));
    }

    #[test]
    fn released_button_never_fires() {
        let mut latch = EdgeLatch::new();
        for _ in 0..10 {
            assert!(!latch.update(false));
        }
    }
}

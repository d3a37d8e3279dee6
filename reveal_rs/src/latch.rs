//! One-shot latch.

use std::cell::Cell;

/// A flag that can be tripped exactly once.
///
/// Checked before any state mutation, so duplicate upstream events are no-ops
/// independent of whether the source has been unsubscribed yet.
#[derive(Debug, Default)]
pub struct Latch {
    fired: Cell<bool>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the latch. Returns `true` only for the first call.
    pub fn try_fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn is_fired(&self) -> bool {
        self.fired.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once() {
        let latch = Latch::new();
        assert!(!latch.is_fired());
        assert!(latch.try_fire());
        assert!(!latch.try_fire());
        assert!(!latch.try_fire());
        assert!(latch.is_fired());
    }
}

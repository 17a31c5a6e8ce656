//! Latest-wins guard for overlapping table refreshes

use std::cell::Cell;
use std::rc::Rc;

/// Stamp of one refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Hands out increasing generations; only the newest one is current.
///
/// A response that completes after a newer refresh was issued is stale and
/// must be dropped by the caller.
#[derive(Debug, Clone, Default)]
pub struct RefreshGuard {
    latest: Rc<Cell<u64>>,
}

impl RefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}

//! Pending score resolutions.
//!
//! Strike and spare frames cannot be scored until later frames are known.
//! The index maps the frame whose completion brings the missing information
//! (the trigger) to the earlier frames waiting on it, in registration order.
//! A strike registers against both of the next two frames; resolving a
//! frame is idempotent, so the second trigger is harmless once the first
//! succeeded.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Frames waiting on a trigger. At most two: a strike two back and a strike
/// or spare one back.
pub type Waiting = SmallVec<[usize; 2]>;

/// Index from trigger frame to the frames waiting on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolutions {
    by_trigger: FxHashMap<usize, Waiting>,
}

impl PendingResolutions {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `waiting` to be resolved again once `trigger` completes.
    pub fn register(&mut self, trigger: usize, waiting: usize) {
        let list = self.by_trigger.entry(trigger).or_default();
        if !list.contains(&waiting) {
            list.push(waiting);
        }
    }

    /// Frames waiting on `trigger`, without consuming them.
    ///
    /// Read-only inspection for callers and tests; the scoring protocol
    /// itself only uses [`PendingResolutions::take`].
    #[must_use]
    pub fn waiting_on(&self, trigger: usize) -> &[usize] {
        match self.by_trigger.get(&trigger) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Remove and return the frames waiting on `trigger`.
    pub fn take(&mut self, trigger: usize) -> Waiting {
        self.by_trigger.remove(&trigger).unwrap_or_default()
    }

    /// Number of triggers with frames waiting on them. Inspection only,
    /// like [`PendingResolutions::waiting_on`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_trigger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_trigger.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_take() {
        let mut pending = PendingResolutions::new();
        pending.register(2, 0);
        pending.register(2, 1);

        assert_eq!(pending.waiting_on(2), &[0, 1]);
        assert_eq!(pending.len(), 1);

        let taken = pending.take(2);
        assert_eq!(taken.as_slice(), &[0, 1]);
        assert!(pending.is_empty());
        assert!(pending.waiting_on(2).is_empty());
    }

    #[test]
    fn test_registration_order_kept() {
        let mut pending = PendingResolutions::new();
        pending.register(5, 3);
        pending.register(5, 4);
        assert_eq!(pending.take(5).as_slice(), &[3, 4]);
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let mut pending = PendingResolutions::new();
        pending.register(1, 0);
        pending.register(1, 0);
        assert_eq!(pending.waiting_on(1), &[0]);
    }

    #[test]
    fn test_take_missing_trigger() {
        let mut pending = PendingResolutions::new();
        assert!(pending.take(7).is_empty());
    }
}

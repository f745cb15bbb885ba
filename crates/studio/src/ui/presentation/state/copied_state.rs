//! "Copied" acknowledgment state for copy-to-clipboard buttons
//!
//! One field at a time shows a copied checkmark. The indicator reverts
//! after [`COPIED_REVERT_MS`], or immediately when a different field is
//! copied. The version counter makes stale revert timers harmless: a
//! timer only clears the indicator if no newer copy happened since it
//! was scheduled.

use dioxus::prelude::*;

/// How long the copied checkmark stays before reverting
pub const COPIED_REVERT_MS: u64 = 2000;

/// Plain tracker for which field currently shows "copied"
#[derive(Clone, Debug, Default)]
pub struct CopiedTracker {
    field: Option<String>,
    version: u64,
}

impl CopiedTracker {
    /// Record a copy of `field`; returns the version to pass back to
    /// [`CopiedTracker::clear_if_version`] when the revert timer fires.
    pub fn mark(&mut self, field: impl Into<String>) -> u64 {
        self.version += 1;
        self.field = Some(field.into());
        self.version
    }

    /// Revert the indicator if no newer copy superseded this one
    pub fn clear_if_version(&mut self, version: u64) {
        if self.version == version {
            self.field = None;
        }
    }

    /// Whether `field` currently shows the copied acknowledgment
    pub fn is_copied(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Signal wrapper provided via Dioxus context
#[derive(Clone, Copy)]
pub struct CopiedField {
    tracker: Signal<CopiedTracker>,
}

impl CopiedField {
    pub fn new() -> Self {
        Self {
            tracker: Signal::new(CopiedTracker::default()),
        }
    }

    pub fn mark(&mut self, field: impl Into<String>) -> u64 {
        self.tracker.write().mark(field)
    }

    pub fn clear_if_version(&mut self, version: u64) {
        self.tracker.write().clear_if_version(version);
    }

    pub fn is_copied(&self, field: &str) -> bool {
        self.tracker.read().is_copied(field)
    }
}

impl Default for CopiedField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_one_field_at_a_time() {
        let mut tracker = CopiedTracker::default();
        tracker.mark("headline");
        assert!(tracker.is_copied("headline"));
        assert!(!tracker.is_copied("description"));

        // Copying a different field moves the indicator
        tracker.mark("description");
        assert!(!tracker.is_copied("headline"));
        assert!(tracker.is_copied("description"));
    }

    #[test]
    fn revert_applies_only_for_the_latest_copy() {
        let mut tracker = CopiedTracker::default();
        let first = tracker.mark("headline");
        let second = tracker.mark("cta");

        // The first copy's timer fires late; it must not clear the
        // newer indicator.
        tracker.clear_if_version(first);
        assert!(tracker.is_copied("cta"));

        tracker.clear_if_version(second);
        assert!(!tracker.is_copied("cta"));
    }
}

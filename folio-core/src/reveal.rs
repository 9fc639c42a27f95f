//! Reveal-on-scroll controller.
//!
//! One shared watcher for the whole page. Elements register at mount with a
//! hidden visual state; the first time an element's intersection ratio
//! crosses the threshold it is flipped to revealed and stays revealed, even
//! after scrolling back out of view. Reports are idempotent.

use std::collections::HashMap;
use tracing::debug;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shared viewport watcher with per-element one-way latches.
#[derive(Debug)]
pub struct RevealController {
    threshold: f64,
    revealed: HashMap<String, bool>,
    connected: bool,
}

impl RevealController {
    /// Create the watcher with the default 10% visibility threshold.
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    /// Create the watcher with a custom threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: HashMap::new(),
            connected: true,
        }
    }

    /// Register an element for observation, starting hidden. Registering
    /// an already-observed element keeps its current state.
    pub fn observe(&mut self, id: impl Into<String>) {
        if !self.connected {
            return;
        }
        self.revealed.entry(id.into()).or_insert(false);
    }

    /// Report an intersection for one element. Crossing the threshold
    /// flips the element to revealed permanently; ratios below the
    /// threshold never un-reveal.
    pub fn record_intersection(&mut self, id: &str, ratio: f64) {
        if !self.connected {
            return;
        }
        if ratio >= self.threshold {
            if let Some(state) = self.revealed.get_mut(id) {
                if !*state {
                    debug!(element = id, ratio, "element revealed");
                    *state = true;
                }
            }
        }
    }

    /// Report intersections for a batch of elements.
    pub fn record_intersections<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a str, f64)>,
    ) {
        for (id, ratio) in entries {
            self.record_intersection(id, ratio);
        }
    }

    /// Whether an element has been revealed. Unobserved elements report
    /// hidden.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    /// Number of elements under observation.
    pub fn observed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Number of elements revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.values().filter(|v| **v).count()
    }

    /// Tear down the watcher at unmount. Subsequent reports and
    /// registrations are ignored.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Whether the watcher is still active.
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_start_hidden() {
        let mut reveal = RevealController::new();
        reveal.observe("experience-card-0");
        assert!(!reveal.is_revealed("experience-card-0"));
    }

    #[test]
    fn test_crossing_threshold_reveals() {
        let mut reveal = RevealController::new();
        reveal.observe("card");

        reveal.record_intersection("card", 0.05);
        assert!(!reveal.is_revealed("card"));

        reveal.record_intersection("card", 0.1);
        assert!(reveal.is_revealed("card"));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut reveal = RevealController::new();
        reveal.observe("card");
        reveal.record_intersection("card", 0.8);
        assert!(reveal.is_revealed("card"));

        // Scrolling back out of view must not reset the element
        reveal.record_intersection("card", 0.0);
        assert!(reveal.is_revealed("card"));
    }

    #[test]
    fn test_redundant_reports_are_idempotent() {
        let mut reveal = RevealController::new();
        reveal.observe("card");
        reveal.record_intersection("card", 0.5);
        reveal.record_intersection("card", 0.5);
        reveal.record_intersection("card", 0.5);
        assert!(reveal.is_revealed("card"));
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn test_unobserved_elements_ignored() {
        let mut reveal = RevealController::new();
        reveal.record_intersection("ghost", 1.0);
        assert!(!reveal.is_revealed("ghost"));
        assert_eq!(reveal.observed_count(), 0);
    }

    #[test]
    fn test_disconnect_stops_processing() {
        let mut reveal = RevealController::new();
        reveal.observe("card");
        reveal.disconnect();

        reveal.record_intersection("card", 1.0);
        assert!(!reveal.is_revealed("card"));

        reveal.observe("late");
        assert_eq!(reveal.observed_count(), 1);
        assert!(!reveal.is_connected());
    }

    #[test]
    fn test_batch_reports() {
        let mut reveal = RevealController::new();
        reveal.observe("a");
        reveal.observe("b");
        reveal.observe("c");

        reveal.record_intersections([("a", 0.9), ("b", 0.02), ("c", 0.11)]);

        assert!(reveal.is_revealed("a"));
        assert!(!reveal.is_revealed("b"));
        assert!(reveal.is_revealed("c"));
        assert_eq!(reveal.revealed_count(), 2);
    }
}

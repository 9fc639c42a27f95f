//! Timeline progress controller.
//!
//! Derives one normalized percentage for the experience section from its
//! bounding position relative to the viewport, and broadcasts it to two
//! consumers: the continuous fill bar (through the shared style variable)
//! and the discrete per-entry activation test. Unlike the reveal latch,
//! progress is recomputed from absolute scroll position every time, so
//! scrolling back up deactivates entries again.

use crate::style_vars::StyleVars;
use std::cell::RefCell;
use std::rc::Rc;

/// Name of the shared style variable mirroring the progress percentage.
pub const SCROLL_PERCENT_VAR: &str = "scroll-percent";

/// Bounding measurements of the tracked section for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    /// Top of the section relative to the viewport top (negative once the
    /// section has scrolled past it).
    pub top: f64,
    /// Total height of the section.
    pub height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

type ProgressSubscriber = Box<dyn FnMut(f64)>;

/// Owner of the scroll-progress percentage.
pub struct TimelineProgress {
    percent: f64,
    subscribers: Vec<ProgressSubscriber>,
}

impl TimelineProgress {
    /// Create the controller at 0%.
    pub fn new() -> Self {
        Self {
            percent: 0.0,
            subscribers: Vec::new(),
        }
    }

    /// Pure progress computation. The fill starts once the section top
    /// crosses the viewport midline and completes after one section height
    /// of further scrolling. A non-positive section height yields 0 so no
    /// NaN/Infinity can reach the style variable.
    pub fn compute(metrics: SectionMetrics) -> f64 {
        let start = metrics.top - metrics.viewport_height / 2.0;
        if start >= 0.0 || metrics.height <= 0.0 {
            return 0.0;
        }
        (start.abs() / metrics.height * 100.0).clamp(0.0, 100.0)
    }

    /// Recompute from fresh measurements and notify subscribers. `None`
    /// means the tracked section is not in the document (no-op, the
    /// current value is kept).
    pub fn update(&mut self, metrics: Option<SectionMetrics>) -> f64 {
        let Some(metrics) = metrics else {
            return self.percent;
        };

        self.percent = Self::compute(metrics);
        for subscriber in &mut self.subscribers {
            subscriber(self.percent);
        }
        self.percent
    }

    /// Current percentage in [0, 100].
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Register a reader to be notified on every update.
    pub fn subscribe(&mut self, subscriber: impl FnMut(f64) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Mirror every update into the shared style-variable store, the
    /// second consumer next to the UI state itself.
    pub fn attach_style_mirror(&mut self, vars: Rc<RefCell<StyleVars>>) {
        self.subscribe(move |percent| {
            vars.borrow_mut().set_percent(SCROLL_PERCENT_VAR, percent);
        });
    }
}

impl Default for TimelineProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimelineProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineProgress")
            .field("percent", &self.percent)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Activation threshold of timeline entry `index` among `count` entries:
/// `index / (count - 1) * 100`. A single entry activates immediately.
pub fn entry_threshold(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}

/// Whether entry `index` is active at the given progress. A monotone step
/// function of progress: entries activate in index order and deactivate
/// again when progress drops below their threshold.
pub fn is_entry_active(percent: f64, index: usize, count: usize) -> bool {
    percent >= entry_threshold(index, count)
}

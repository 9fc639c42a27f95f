//! Theme state.
//!
//! A single dark/light flag with one writer (the toggle) and any number of
//! readers. Subscribers are notified on every change so the renderer can
//! re-annotate the presentation root.

use serde::{Deserialize, Serialize};

/// The two palettes of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Marker applied to the presentation root, the analogue of the `dark`
    /// class on the document element.
    pub fn root_marker(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root_marker())
    }
}

type ThemeSubscriber = Box<dyn FnMut(ThemeMode)>;

/// Owner of the theme flag.
pub struct ThemeState {
    mode: ThemeMode,
    subscribers: Vec<ThemeSubscriber>,
}

impl ThemeState {
    /// Create the state holder with an initial mode.
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: initial,
            subscribers: Vec::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the flag and notify every subscriber with the new mode.
    /// Toggling twice restores the original value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        let mode = self.mode;
        for subscriber in &mut self.subscribers {
            subscriber(mode);
        }
        mode
    }

    /// Register a reader to be notified on every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ThemeMode) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_is_involution() {
        let mut theme = ThemeState::new(ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_subscribers_observe_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);

        let mut theme = ThemeState::new(ThemeMode::Light);
        theme.subscribe(move |mode| seen_clone.borrow_mut().push(mode));

        theme.toggle();
        theme.toggle();
        theme.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark]
        );
    }

    #[test]
    fn test_root_marker() {
        assert_eq!(ThemeMode::Dark.root_marker(), "dark");
        assert_eq!(ThemeMode::Light.root_marker(), "light");
        assert!(ThemeMode::Dark.is_dark());
    }
}

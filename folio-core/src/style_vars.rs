//! Shared style-variable store.
//!
//! The analogue of CSS custom properties on the document root: a small
//! map of named variables, each written by exactly one controller and read
//! declaratively by the renderer.

use std::collections::HashMap;

/// Globally readable style variables.
#[derive(Debug, Clone, Default)]
pub struct StyleVars {
    vars: HashMap<String, String>,
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw variable value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Set a percentage variable, stored as "42.5%".
    pub fn set_percent(&mut self, name: &str, percent: f64) {
        self.set(name, format!("{percent}%"));
    }

    /// Raw variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Parse a percentage variable back to its numeric value.
    pub fn get_percent(&self, name: &str) -> Option<f64> {
        self.get(name)?.strip_suffix('%')?.parse().ok()
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut vars = StyleVars::new();
        vars.set("accent", "indigo");
        assert_eq!(vars.get("accent"), Some("indigo"));
        assert_eq!(vars.get("missing"), None);
    }

    #[test]
    fn test_percent_roundtrip() {
        let mut vars = StyleVars::new();
        vars.set_percent("scroll-percent", 37.5);
        assert_eq!(vars.get("scroll-percent"), Some("37.5%"));
        assert_eq!(vars.get_percent("scroll-percent"), Some(37.5));
    }

    #[test]
    fn test_get_percent_rejects_non_percent() {
        let mut vars = StyleVars::new();
        vars.set("accent", "indigo");
        assert_eq!(vars.get_percent("accent"), None);
    }

    #[test]
    fn test_overwrite_keeps_single_value() {
        let mut vars = StyleVars::new();
        vars.set_percent("scroll-percent", 10.0);
        vars.set_percent("scroll-percent", 90.0);
        assert_eq!(vars.get_percent("scroll-percent"), Some(90.0));
        assert_eq!(vars.len(), 1);
    }
}

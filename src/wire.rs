//! Declared reactive inputs.
//!
//! Components declare the inputs their fetches depend on as named
//! [`WiredInput`] cells. Setting a cell reports whether the value changed,
//! and the owning component re-dispatches its fetch on change. This keeps
//! the re-fetch trigger explicit: no hidden observers, level-triggered on
//! value change, no debouncing or coalescing.

use tracing::trace;

/// A named input a fetch depends on.
#[derive(Debug)]
pub struct WiredInput<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T: PartialEq> WiredInput<T> {
    /// Declare an input with no value yet.
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// Declare an input with an initial value. The initial value counts
    /// as already-dispatched; only later changes trigger.
    pub fn with_value(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Store a new value. Returns `true` when the value changed and the
    /// dependent fetch must be re-dispatched.
    pub fn set(&mut self, value: T) -> bool {
        if self.value.as_ref() == Some(&value) {
            return false;
        }
        trace!(input = self.name, "input changed");
        self.value = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_assignment_triggers() {
        let mut input = WiredInput::new("filter");
        assert!(input.set("a01"));
        assert_eq!(input.get(), Some(&"a01"));
    }

    #[test]
    fn unchanged_value_does_not_trigger() {
        let mut input = WiredInput::with_value("filter", "a01");
        assert!(!input.set("a01"));
        assert!(input.set("a02"));
    }

    #[test]
    fn initial_value_counts_as_dispatched() {
        let input = WiredInput::with_value("filter", "a01");
        assert_eq!(input.get(), Some(&"a01"));
    }
}

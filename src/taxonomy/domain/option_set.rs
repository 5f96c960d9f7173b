//! Option sets offered to a dropdown control.

use super::TaxonomyLevel;
use serde::{Deserialize, Serialize};

/// Options available at one taxonomy level, plus whether the control is
/// enabled.
///
/// An empty option set is always disabled so the form can never submit a
/// placeholder as a real choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    level: TaxonomyLevel,
    options: Vec<String>,
    enabled: bool,
}

impl OptionSet {
    /// Creates an option set; the control is enabled iff options exist.
    #[must_use]
    pub fn new(level: TaxonomyLevel, options: Vec<String>) -> Self {
        let enabled = !options.is_empty();
        Self {
            level,
            options,
            enabled,
        }
    }

    /// Creates a disabled, empty option set for `level`.
    #[must_use]
    pub const fn disabled(level: TaxonomyLevel) -> Self {
        Self {
            level,
            options: Vec::new(),
            enabled: false,
        }
    }

    /// Returns the level these options belong to.
    #[must_use]
    pub const fn level(&self) -> TaxonomyLevel {
        self.level
    }

    /// Returns the options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns whether the control should accept input.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns whether `value` is one of the offered options.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }
}

//! Configuration for task lifecycle services.

use crate::task::ports::TaskOrdering;

/// Behavioural settings for [`super::TaskLifecycleService`].
///
/// # Examples
///
/// ```
/// use capstone::task::services::LifecycleConfig;
///
/// let config = LifecycleConfig::default();
/// assert!(config.require_adviser_for_create);
///
/// let lenient = LifecycleConfig::lenient();
/// assert!(!lenient.require_adviser_for_create);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// Order of task listings.
    pub listing_order: TaskOrdering,
    /// Whether only advisers may create tasks.
    pub require_adviser_for_create: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            listing_order: TaskOrdering::CreatedDescending,
            require_adviser_for_create: true,
        }
    }
}

impl LifecycleConfig {
    /// Creates a configuration that lets any signed-in role create tasks.
    ///
    /// Useful for testing or single-user tooling.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_adviser_for_create: false,
            ..Default::default()
        }
    }

    /// Lists tasks oldest first.
    #[must_use]
    pub const fn oldest_first(mut self) -> Self {
        self.listing_order = TaskOrdering::CreatedAscending;
        self
    }
}

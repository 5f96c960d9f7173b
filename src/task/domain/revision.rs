//! Revision counter for missed tasks.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of times a missed task has been reopened, from 0 to 10.
///
/// The integer is authoritative; [`Revision::label`] is presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Revision(u8);

impl Revision {
    /// Highest revision a task can reach.
    pub const MAX: u8 = 10;

    /// A task that has never been revised.
    pub const NONE: Self = Self(0);

    /// Creates a validated revision counter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::OutOfRange`] when `value` exceeds
    /// [`Revision::MAX`].
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > Self::MAX {
            return Err(TaskDomainError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the counter value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether the cap has been reached.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.0 >= Self::MAX
    }

    /// Returns the next revision, saturating at the cap.
    #[must_use]
    pub const fn next_capped(self) -> Self {
        if self.is_exhausted() {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// Returns the display label, e.g. `"2nd Revision"`.
    #[must_use]
    pub fn label(self) -> String {
        revision_label(u32::from(self.0))
    }
}

/// Formats a revision count for display.
///
/// Only 1, 2 and 3 get irregular suffixes; every other positive count uses
/// `th`, including 11 to 13.
#[must_use]
pub fn revision_label(count: u32) -> String {
    match count {
        0 => "No Revision".to_owned(),
        1 => "1st Revision".to_owned(),
        2 => "2nd Revision".to_owned(),
        3 => "3rd Revision".to_owned(),
        n => format!("{n}th Revision"),
    }
}

impl TryFrom<u8> for Revision {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Revision> for u8 {
    fn from(value: Revision) -> Self {
        value.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Result of advancing the revision of a missed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionOutcome {
    /// The counter advanced and the task went back to To Do.
    Reopened(Revision),
    /// The cap was reached; the task stays Missed.
    Exhausted(Revision),
}

impl RevisionOutcome {
    /// Returns the revision after the operation.
    #[must_use]
    pub const fn revision(self) -> Revision {
        match self {
            Self::Reopened(revision) | Self::Exhausted(revision) => revision,
        }
    }

    /// Returns whether the revision cap was reached.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
}

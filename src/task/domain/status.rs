//! Task status values.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    ToDo,
    /// The team is working on the task.
    InProgress,
    /// The team has submitted work for adviser review.
    ToReview,
    /// The adviser accepted the work; no further status changes.
    Completed,
    /// The due date passed without completion; only a revision reopens it.
    Missed,
}

impl TaskStatus {
    /// Every status, in board column order.
    pub const ALL: [Self; 5] = [
        Self::ToDo,
        Self::InProgress,
        Self::ToReview,
        Self::Completed,
        Self::Missed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::ToReview => "to_review",
            Self::Completed => "completed",
            Self::Missed => "missed",
        }
    }

    /// Returns the label shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::ToReview => "To Review",
            Self::Completed => "Completed",
            Self::Missed => "Missed",
        }
    }

    /// Returns whether `set_status` refuses to leave this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Missed)
    }

    /// Returns whether a direct status edit may move from `self` to `target`.
    ///
    /// Missed is entered only through a missed-deadline signal and left only
    /// through a revision, so it is never a valid edit source or target.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        !self.is_terminal() && !matches!(target, Self::Missed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(' ', "_");
        match normalized.as_str() {
            "to_do" | "todo" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "to_review" => Ok(Self::ToReview),
            "completed" => Ok(Self::Completed),
            "missed" => Ok(Self::Missed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

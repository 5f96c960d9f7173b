//! The six dependent taxonomy levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the dependent task classification.
///
/// Levels are ordered from the root (`Methodology`) to the leaf
/// (`Element`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyLevel {
    /// Project methodology, the taxonomy root.
    Methodology,
    /// Phase within a methodology.
    Phase,
    /// Task type within a phase.
    TaskType,
    /// Task within a task type.
    Task,
    /// Subtask within a task.
    Subtask,
    /// Element within a subtask.
    Element,
}

impl TaxonomyLevel {
    /// All levels from root to leaf.
    pub const ALL: [Self; 6] = [
        Self::Methodology,
        Self::Phase,
        Self::TaskType,
        Self::Task,
        Self::Subtask,
        Self::Element,
    ];

    /// Returns the zero-based depth of the level.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Methodology => 0,
            Self::Phase => 1,
            Self::TaskType => 2,
            Self::Task => 3,
            Self::Subtask => 4,
            Self::Element => 5,
        }
    }

    /// Returns the level directly above, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Methodology => None,
            Self::Phase => Some(Self::Methodology),
            Self::TaskType => Some(Self::Phase),
            Self::Task => Some(Self::TaskType),
            Self::Subtask => Some(Self::Task),
            Self::Element => Some(Self::Subtask),
        }
    }

    /// Returns the level directly below, or `None` for the leaf.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Methodology => Some(Self::Phase),
            Self::Phase => Some(Self::TaskType),
            Self::TaskType => Some(Self::Task),
            Self::Task => Some(Self::Subtask),
            Self::Subtask => Some(Self::Element),
            Self::Element => None,
        }
    }

    /// Returns the human-readable label used by the creation form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Methodology => "methodology",
            Self::Phase => "phase",
            Self::TaskType => "task type",
            Self::Task => "task",
            Self::Subtask => "subtask",
            Self::Element => "element",
        }
    }
}

impl fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

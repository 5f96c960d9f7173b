//! Per-form taxonomy selection.

use super::{TaxonomyError, TaxonomyLevel};
use serde::{Deserialize, Serialize};

/// The six-level classification chosen on a task creation form.
///
/// If a level is unset, every level below it is unset too. Only the
/// resolver mutates a selection, which keeps that invariant intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SelectionFields")]
pub struct Selection {
    methodology: Option<String>,
    phase: Option<String>,
    task_type: Option<String>,
    task: Option<String>,
    subtask: Option<String>,
    element: Option<String>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value chosen at `level`, if any.
    #[must_use]
    pub fn get(&self, level: TaxonomyLevel) -> Option<&str> {
        self.slot(level).as_deref()
    }

    /// Returns the selected methodology.
    #[must_use]
    pub fn methodology(&self) -> Option<&str> {
        self.get(TaxonomyLevel::Methodology)
    }

    /// Returns the selected phase.
    #[must_use]
    pub fn phase(&self) -> Option<&str> {
        self.get(TaxonomyLevel::Phase)
    }

    /// Returns the selected task type.
    #[must_use]
    pub fn task_type(&self) -> Option<&str> {
        self.get(TaxonomyLevel::TaskType)
    }

    /// Returns the selected task.
    #[must_use]
    pub fn task(&self) -> Option<&str> {
        self.get(TaxonomyLevel::Task)
    }

    /// Returns the selected subtask.
    #[must_use]
    pub fn subtask(&self) -> Option<&str> {
        self.get(TaxonomyLevel::Subtask)
    }

    /// Returns the selected element.
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.get(TaxonomyLevel::Element)
    }

    /// Returns the deepest level that has a value, if any.
    #[must_use]
    pub fn deepest_set_level(&self) -> Option<TaxonomyLevel> {
        TaxonomyLevel::ALL
            .into_iter()
            .take_while(|level| self.get(*level).is_some())
            .last()
    }

    /// Returns whether no level is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methodology.is_none()
    }

    /// Sets `level` and unsets every level below it.
    pub(crate) fn assign(&mut self, level: TaxonomyLevel, value: String) {
        *self.slot_mut(level) = Some(value);
        if let Some(child) = level.child() {
            self.clear_from(child);
        }
    }

    /// Unsets `level` and every level below it.
    pub(crate) fn clear_from(&mut self, level: TaxonomyLevel) {
        for current in TaxonomyLevel::ALL {
            if current >= level {
                *self.slot_mut(current) = None;
            }
        }
    }

    const fn slot(&self, level: TaxonomyLevel) -> &Option<String> {
        match level {
            TaxonomyLevel::Methodology => &self.methodology,
            TaxonomyLevel::Phase => &self.phase,
            TaxonomyLevel::TaskType => &self.task_type,
            TaxonomyLevel::Task => &self.task,
            TaxonomyLevel::Subtask => &self.subtask,
            TaxonomyLevel::Element => &self.element,
        }
    }

    const fn slot_mut(&mut self, level: TaxonomyLevel) -> &mut Option<String> {
        match level {
            TaxonomyLevel::Methodology => &mut self.methodology,
            TaxonomyLevel::Phase => &mut self.phase,
            TaxonomyLevel::TaskType => &mut self.task_type,
            TaxonomyLevel::Task => &mut self.task,
            TaxonomyLevel::Subtask => &mut self.subtask,
            TaxonomyLevel::Element => &mut self.element,
        }
    }
}

/// Unchecked wire shape of a [`Selection`].
#[derive(Deserialize)]
struct SelectionFields {
    methodology: Option<String>,
    phase: Option<String>,
    task_type: Option<String>,
    task: Option<String>,
    subtask: Option<String>,
    element: Option<String>,
}

impl TryFrom<SelectionFields> for Selection {
    type Error = TaxonomyError;

    fn try_from(fields: SelectionFields) -> Result<Self, Self::Error> {
        let selection = Self {
            methodology: fields.methodology,
            phase: fields.phase,
            task_type: fields.task_type,
            task: fields.task,
            subtask: fields.subtask,
            element: fields.element,
        };
        for level in TaxonomyLevel::ALL {
            let Some(parent) = level.parent() else {
                continue;
            };
            if selection.get(level).is_some() && selection.get(parent).is_none() {
                return Err(TaxonomyError::OutOfOrderSelection {
                    level,
                    missing: parent,
                });
            }
        }
        Ok(selection)
    }
}

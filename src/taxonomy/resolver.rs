//! Cascading resolution of dependent taxonomy selections.
//!
//! Every operation is a pure function of the taxonomy and the selection
//! passed in: the resolver holds no per-form state, so repeating a call with
//! identical inputs yields identical option sets.

use super::domain::{OptionSet, Selection, TaskTaxonomy, TaxonomyError, TaxonomyLevel};
use std::sync::Arc;

/// Resolves option sets for each level of a [`Selection`].
#[derive(Debug, Clone)]
pub struct TaxonomyResolver {
    taxonomy: Arc<TaskTaxonomy>,
}

impl TaxonomyResolver {
    /// Creates a resolver over a shared taxonomy.
    #[must_use]
    pub const fn new(taxonomy: Arc<TaskTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Returns the taxonomy being resolved against.
    #[must_use]
    pub fn taxonomy(&self) -> &TaskTaxonomy {
        &self.taxonomy
    }

    /// Returns the methodology options, which never depend on a selection.
    #[must_use]
    pub fn options_for_methodology(&self) -> OptionSet {
        OptionSet::new(
            TaxonomyLevel::Methodology,
            self.taxonomy.methodology_names().map(str::to_owned).collect(),
        )
    }

    /// Returns the options offered at `level` given the levels above it.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::OutOfOrderSelection`] when a level above
    /// `level` is still unset.
    pub fn options_for(
        &self,
        level: TaxonomyLevel,
        selection: &Selection,
    ) -> Result<OptionSet, TaxonomyError> {
        let Some(parent) = level.parent() else {
            return Ok(self.options_for_methodology());
        };
        if let Some(missing) = first_unset_above(level, selection) {
            return Err(TaxonomyError::OutOfOrderSelection { level, missing });
        }

        let entry = selection
            .methodology()
            .and_then(|name| self.taxonomy.methodology(name));
        let parent_value = selection.get(parent);
        let options = match (entry, parent_value) {
            (Some(found), Some(value)) => found.options_under(level, value).to_vec(),
            _ => Vec::new(),
        };
        Ok(OptionSet::new(level, options))
    }

    /// Selects a methodology and returns the phase options.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::UnknownOption`] when the methodology does
    /// not exist. The selection is left unchanged on error.
    pub fn on_methodology_selected(
        &self,
        selection: &mut Selection,
        methodology: impl Into<String>,
    ) -> Result<OptionSet, TaxonomyError> {
        self.select(TaxonomyLevel::Methodology, selection, methodology.into())
    }

    /// Selects a phase and returns the task type options.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::OutOfOrderSelection`] when no methodology is
    /// selected, or [`TaxonomyError::UnknownOption`] for an unoffered phase.
    pub fn on_phase_selected(
        &self,
        selection: &mut Selection,
        phase: impl Into<String>,
    ) -> Result<OptionSet, TaxonomyError> {
        self.select(TaxonomyLevel::Phase, selection, phase.into())
    }

    /// Selects a task type and returns the task options.
    ///
    /// # Errors
    ///
    /// See [`TaxonomyResolver::on_phase_selected`].
    pub fn on_task_type_selected(
        &self,
        selection: &mut Selection,
        task_type: impl Into<String>,
    ) -> Result<OptionSet, TaxonomyError> {
        self.select(TaxonomyLevel::TaskType, selection, task_type.into())
    }

    /// Selects a task and returns the subtask options.
    ///
    /// # Errors
    ///
    /// See [`TaxonomyResolver::on_phase_selected`].
    pub fn on_task_selected(
        &self,
        selection: &mut Selection,
        task: impl Into<String>,
    ) -> Result<OptionSet, TaxonomyError> {
        self.select(TaxonomyLevel::Task, selection, task.into())
    }

    /// Selects a subtask and returns the element options.
    ///
    /// # Errors
    ///
    /// See [`TaxonomyResolver::on_phase_selected`].
    pub fn on_subtask_selected(
        &self,
        selection: &mut Selection,
        subtask: impl Into<String>,
    ) -> Result<OptionSet, TaxonomyError> {
        self.select(TaxonomyLevel::Subtask, selection, subtask.into())
    }

    /// Selects an element, the leaf level.
    ///
    /// # Errors
    ///
    /// See [`TaxonomyResolver::on_phase_selected`].
    pub fn on_element_selected(
        &self,
        selection: &mut Selection,
        element: impl Into<String>,
    ) -> Result<(), TaxonomyError> {
        self.assign(TaxonomyLevel::Element, selection, element.into())
    }

    /// Unsets `level` and everything below it, returning the recomputed
    /// options for `level`.
    ///
    /// Clearing a level whose parent is unset yields a disabled set.
    pub fn clear(&self, level: TaxonomyLevel, selection: &mut Selection) -> OptionSet {
        selection.clear_from(level);
        self.options_for(level, selection)
            .unwrap_or_else(|_| OptionSet::disabled(level))
    }

    /// Returns the option set for every level, root first.
    ///
    /// Levels whose parent is unset are reported disabled.
    #[must_use]
    pub fn form_state(&self, selection: &Selection) -> Vec<OptionSet> {
        TaxonomyLevel::ALL
            .into_iter()
            .map(|level| {
                self.options_for(level, selection)
                    .unwrap_or_else(|_| OptionSet::disabled(level))
            })
            .collect()
    }

    /// Checks that a selection can be submitted.
    ///
    /// Every level whose control is enabled must be set, and every set value
    /// must still be offered by the taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::IncompleteSelection`] naming the first
    /// enabled level left unset, or [`TaxonomyError::UnknownOption`] for a
    /// stale value.
    pub fn validate_submission(&self, selection: &Selection) -> Result<(), TaxonomyError> {
        for level in TaxonomyLevel::ALL {
            let options = self.options_for(level, selection)?;
            match selection.get(level) {
                Some(value) if options.contains(value) => {}
                Some(value) => {
                    return Err(TaxonomyError::UnknownOption {
                        level,
                        value: value.to_owned(),
                    });
                }
                None if options.enabled() => {
                    return Err(TaxonomyError::IncompleteSelection(level));
                }
                None => return Ok(()),
            }
        }
        Ok(())
    }

    fn select(
        &self,
        level: TaxonomyLevel,
        selection: &mut Selection,
        value: String,
    ) -> Result<OptionSet, TaxonomyError> {
        self.assign(level, selection, value)?;
        match level.child() {
            Some(child) => self.options_for(child, selection),
            None => Ok(OptionSet::disabled(level)),
        }
    }

    fn assign(
        &self,
        level: TaxonomyLevel,
        selection: &mut Selection,
        value: String,
    ) -> Result<(), TaxonomyError> {
        let options = self.options_for(level, selection)?;
        if !options.contains(&value) {
            return Err(TaxonomyError::UnknownOption { level, value });
        }
        selection.assign(level, value);
        Ok(())
    }
}

fn first_unset_above(level: TaxonomyLevel, selection: &Selection) -> Option<TaxonomyLevel> {
    TaxonomyLevel::ALL
        .into_iter()
        .take_while(|current| *current < level)
        .find(|current| selection.get(*current).is_none())
}

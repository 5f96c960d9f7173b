//! Static task taxonomy tree.

use super::{TaxonomyError, TaxonomyLevel};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

type OptionMap = BTreeMap<String, Vec<String>>;

/// Options for every dependent level below one methodology.
///
/// `phases` is the ordered phase list. Each further map is keyed by an
/// option of the level above: task types by phase, tasks by task type,
/// subtasks by task and elements by subtask.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodologyEntry {
    #[serde(default)]
    phases: Vec<String>,
    #[serde(default)]
    task_types: OptionMap,
    #[serde(default)]
    tasks: OptionMap,
    #[serde(default)]
    subtasks: OptionMap,
    #[serde(default)]
    elements: OptionMap,
}

impl MethodologyEntry {
    /// Creates an entry with no phases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered phase list.
    #[must_use]
    pub fn with_phases<I, S>(mut self, phases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phases = phases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the task types offered under `phase`.
    #[must_use]
    pub fn with_task_types<I, S>(mut self, phase: impl Into<String>, task_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_options(&mut self.task_types, phase, task_types);
        self
    }

    /// Sets the tasks offered under `task_type`.
    #[must_use]
    pub fn with_tasks<I, S>(mut self, task_type: impl Into<String>, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_options(&mut self.tasks, task_type, tasks);
        self
    }

    /// Sets the subtasks offered under `task`.
    #[must_use]
    pub fn with_subtasks<I, S>(mut self, task: impl Into<String>, subtasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_options(&mut self.subtasks, task, subtasks);
        self
    }

    /// Sets the elements offered under `subtask`.
    #[must_use]
    pub fn with_elements<I, S>(mut self, subtask: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_options(&mut self.elements, subtask, elements);
        self
    }

    /// Returns the ordered phase list.
    #[must_use]
    pub fn phases(&self) -> &[String] {
        &self.phases
    }

    /// Returns the options offered at `level` beneath `parent`.
    ///
    /// `parent` is ignored for [`TaxonomyLevel::Phase`]. The methodology
    /// level has no options inside an entry and always yields an empty
    /// slice.
    #[must_use]
    pub fn options_under(&self, level: TaxonomyLevel, parent: &str) -> &[String] {
        let map = match level {
            TaxonomyLevel::Methodology => return &[],
            TaxonomyLevel::Phase => return &self.phases,
            TaxonomyLevel::TaskType => &self.task_types,
            TaxonomyLevel::Task => &self.tasks,
            TaxonomyLevel::Subtask => &self.subtasks,
            TaxonomyLevel::Element => &self.elements,
        };
        map.get(parent).map(Vec::as_slice).unwrap_or_default()
    }

    fn map_for(&self, level: TaxonomyLevel) -> Option<&OptionMap> {
        match level {
            TaxonomyLevel::Methodology | TaxonomyLevel::Phase => None,
            TaxonomyLevel::TaskType => Some(&self.task_types),
            TaxonomyLevel::Task => Some(&self.tasks),
            TaxonomyLevel::Subtask => Some(&self.subtasks),
            TaxonomyLevel::Element => Some(&self.elements),
        }
    }

    /// Checks names and parent keys level by level.
    fn validate(&self, methodology: &str) -> Result<(), TaxonomyError> {
        ensure_names(TaxonomyLevel::Phase, &self.phases)?;
        let mut offered: BTreeSet<&str> = self.phases.iter().map(String::as_str).collect();

        for level in TaxonomyLevel::ALL {
            let Some(map) = self.map_for(level) else {
                continue;
            };
            let mut next_offered = BTreeSet::new();
            for (key, options) in map {
                if !offered.contains(key.as_str()) {
                    return Err(TaxonomyError::DanglingKey {
                        methodology: methodology.to_owned(),
                        level,
                        key: key.clone(),
                    });
                }
                ensure_names(level, options)?;
                next_offered.extend(options.iter().map(String::as_str));
            }
            offered = next_offered;
        }
        Ok(())
    }
}

fn insert_options<I, S>(map: &mut OptionMap, key: impl Into<String>, options: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    map.insert(key.into(), options.into_iter().map(Into::into).collect());
}

fn ensure_names(level: TaxonomyLevel, names: &[String]) -> Result<(), TaxonomyError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(TaxonomyError::EmptyName(level));
    }
    Ok(())
}

/// Read-only task taxonomy keyed by methodology name.
///
/// Construction validates that every option map is keyed by a name the
/// level above actually offers, so the taxonomy is a strict tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, MethodologyEntry>",
    into = "BTreeMap<String, MethodologyEntry>"
)]
pub struct TaskTaxonomy {
    methodologies: BTreeMap<String, MethodologyEntry>,
}

impl TaskTaxonomy {
    /// Builds a validated taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::EmptyName`] for blank names and
    /// [`TaxonomyError::DanglingKey`] when an option map references a
    /// parent the level above does not offer.
    pub fn new(methodologies: BTreeMap<String, MethodologyEntry>) -> Result<Self, TaxonomyError> {
        for (name, entry) in &methodologies {
            ensure_names(TaxonomyLevel::Methodology, std::slice::from_ref(name))?;
            entry.validate(name)?;
        }
        Ok(Self { methodologies })
    }

    /// Builds a validated taxonomy from `(name, entry)` pairs.
    ///
    /// # Errors
    ///
    /// See [`TaskTaxonomy::new`].
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = (S, MethodologyEntry)>,
        S: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        )
    }

    /// Returns methodology names in sorted order.
    pub fn methodology_names(&self) -> impl Iterator<Item = &str> {
        self.methodologies.keys().map(String::as_str)
    }

    /// Returns the entry for `methodology`, if present.
    #[must_use]
    pub fn methodology(&self, methodology: &str) -> Option<&MethodologyEntry> {
        self.methodologies.get(methodology)
    }

    /// Returns the number of methodologies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methodologies.len()
    }

    /// Returns whether the taxonomy has no methodologies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methodologies.is_empty()
    }
}

impl TryFrom<BTreeMap<String, MethodologyEntry>> for TaskTaxonomy {
    type Error = TaxonomyError;

    fn try_from(value: BTreeMap<String, MethodologyEntry>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTaxonomy> for BTreeMap<String, MethodologyEntry> {
    fn from(value: TaskTaxonomy) -> Self {
        value.methodologies
    }
}

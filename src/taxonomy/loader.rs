//! Startup loading of the static task taxonomy.
//!
//! The taxonomy document is a JSON object keyed by methodology name:
//!
//! ```json
//! {
//!   "Agile": {
//!     "phases": ["Planning", "Development"],
//!     "task_types": { "Planning": ["Kickoff"] },
//!     "tasks": { "Kickoff": ["Draft Charter"] },
//!     "subtasks": { "Draft Charter": ["Charter Doc"] },
//!     "elements": {}
//!   }
//! }
//! ```
//!
//! Every option map is keyed by the option one level up: `task_types` by
//! phase, `tasks` by task type, `subtasks` by task and `elements` by
//! subtask. A document that keys `tasks` by phase is rejected with
//! [`TaxonomyError::DanglingKey`]; options offered directly under a phase
//! belong in `task_types`.

use super::domain::{TaskTaxonomy, TaxonomyError};
use camino::Utf8Path;
use cap_std::fs_utf8::Dir;

/// Parses and validates a taxonomy from a JSON document.
///
/// # Errors
///
/// Returns [`TaxonomyError::Malformed`] when the document is not valid JSON
/// or does not match the taxonomy shape, and the tree validation errors of
/// [`TaskTaxonomy::new`] otherwise.
///
/// # Examples
///
/// ```
/// use capstone::taxonomy::loader::parse_taxonomy;
///
/// let taxonomy = parse_taxonomy(r#"{"Scrum": {"phases": ["Sprint 1"]}}"#)
///     .expect("valid taxonomy");
/// assert_eq!(taxonomy.methodology_names().collect::<Vec<_>>(), ["Scrum"]);
/// ```
pub fn parse_taxonomy(document: &str) -> Result<TaskTaxonomy, TaxonomyError> {
    let methodologies = serde_json::from_str(document)
        .map_err(|err| TaxonomyError::Malformed(err.to_string()))?;
    TaskTaxonomy::new(methodologies)
}

/// Reads and validates a taxonomy file inside `dir`.
///
/// # Errors
///
/// Returns [`TaxonomyError::Io`] when the file cannot be read, otherwise
/// the errors of [`parse_taxonomy`].
pub fn load_taxonomy(dir: &Dir, path: &Utf8Path) -> Result<TaskTaxonomy, TaxonomyError> {
    let document = dir.read_to_string(path).map_err(|err| TaxonomyError::Io {
        path: path.to_string(),
        message: err.to_string(),
    })?;
    let taxonomy = parse_taxonomy(&document)?;
    tracing::info!(
        path = %path,
        methodologies = taxonomy.len(),
        "loaded task taxonomy"
    );
    Ok(taxonomy)
}

//! Error types for taxonomy loading and selection resolution.

use super::TaxonomyLevel;
use thiserror::Error;

/// Errors returned while building a taxonomy or resolving a selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A level was selected before its parent level.
    #[error("selection out of order: {level} selected before {missing}")]
    OutOfOrderSelection {
        /// Level the caller tried to select.
        level: TaxonomyLevel,
        /// Parent level that is still unset.
        missing: TaxonomyLevel,
    },

    /// The selected value is not offered at this level.
    #[error("'{value}' is not a valid {level} option")]
    UnknownOption {
        /// Level being selected.
        level: TaxonomyLevel,
        /// Rejected value.
        value: String,
    },

    /// A submitted selection leaves an enabled level unset.
    #[error("selection is incomplete: {0} must be selected")]
    IncompleteSelection(TaxonomyLevel),

    /// A taxonomy map is keyed by a name the parent level never offers.
    #[error("methodology '{methodology}' has {level} options keyed by unknown parent '{key}'")]
    DanglingKey {
        /// Methodology containing the dangling key.
        methodology: String,
        /// Level whose option map holds the key.
        level: TaxonomyLevel,
        /// Dangling parent name.
        key: String,
    },

    /// An option or methodology name is empty after trimming.
    #[error("taxonomy names must not be empty ({0} level)")]
    EmptyName(TaxonomyLevel),

    /// The taxonomy source could not be decoded.
    #[error("malformed taxonomy document: {0}")]
    Malformed(String),

    /// The taxonomy source could not be read.
    #[error("failed to read taxonomy from '{path}': {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
}

//! Domain model for the static task taxonomy and form selections.
//!
//! The taxonomy is a read-only tree rooted at the methodology. Selections
//! are ephemeral per-form values that only the resolver mutates.

mod error;
mod level;
mod option_set;
mod selection;
mod tree;

pub use error::TaxonomyError;
pub use level::TaxonomyLevel;
pub use option_set::OptionSet;
pub use selection::Selection;
pub use tree::{MethodologyEntry, TaskTaxonomy};

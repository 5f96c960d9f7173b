//! Task taxonomy resolution for the task creation form.
//!
//! A task is classified by six dependent levels: methodology, phase, task
//! type, task, subtask and element. Each level's options depend on the
//! selections made above it, so changing a level invalidates everything
//! below it. The module is split into:
//!
//! - Domain types in [`domain`]
//! - The pure cascading resolver in [`resolver`]
//! - Startup loading of the static taxonomy in [`loader`]

pub mod domain;
pub mod loader;
pub mod resolver;

#[cfg(test)]
mod tests;

//! Step definitions for taxonomy selection scenarios.

mod given;
mod then;
mod when;

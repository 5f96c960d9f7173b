//! Step definitions for task status lifecycle scenarios.

mod given;
mod then;
mod when;

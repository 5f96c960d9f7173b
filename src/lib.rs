//! Capstone: task tracking core for a capstone-project adviser dashboard.
//!
//! This crate holds the logic behind the dashboard's task screens. Advisers
//! classify tasks with a cascading six-level taxonomy, assign them to
//! teams, and move them through a status lifecycle with a capped revision
//! counter for missed deadlines.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the hosted data and blob stores
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`taxonomy`]: Static task taxonomy and the cascading selection resolver
//! - [`task`]: Task records, lifecycle rules and orchestration services
//! - [`session`]: Read-only identity of the signed-in user

pub mod session;
pub mod task;
pub mod taxonomy;

//! Capstone task tracking.
//!
//! Advisers create tasks for their teams, one row per team, classified by
//! the task taxonomy. Each task then moves through a status lifecycle with a
//! capped revision counter for missed deadlines. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

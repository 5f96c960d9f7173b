//! Unit tests for the taxonomy module.

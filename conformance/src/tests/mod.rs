//! Test fixtures shared by unit and integration tests.

pub mod fixtures;

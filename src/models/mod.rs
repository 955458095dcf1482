//! Domain models
//!
//! This module contains the database-backed domain models.

pub mod problem;
pub mod test_case;

pub use problem::*;
pub use test_case::*;

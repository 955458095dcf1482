//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Test case database model
///
/// Rows are composition children of a problem: replacing a problem replaces
/// its test cases wholesale, and `position` preserves the source order.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub is_sample: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

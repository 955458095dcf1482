//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub is_active: bool,
    pub time_limit_ms: i32,
    pub memory_limit_mb: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

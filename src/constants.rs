//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// IMPORT LIMITS
// =============================================================================

/// Default maximum number of records accepted in a single import batch
pub const DEFAULT_MAX_IMPORT_ROWS: usize = 1000;

/// Default maximum size of an uploaded import document in bytes (10 MiB)
pub const DEFAULT_MAX_IMPORT_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length in characters
pub const MAX_PROBLEM_TITLE_LENGTH: usize = 200;

/// Minimum slug length
pub const MIN_SLUG_LENGTH: usize = 2;

/// Maximum slug length
pub const MAX_SLUG_LENGTH: usize = 100;

/// Lowest accepted numeric difficulty rating
pub const MIN_NUMERIC_DIFFICULTY: i32 = 1;

/// Highest accepted numeric difficulty rating
pub const MAX_NUMERIC_DIFFICULTY: i32 = 5;

// =============================================================================
// DIFFICULTY LEVELS
// =============================================================================

/// Named difficulty levels
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All named difficulty levels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORGANIZER: &str = "organizer";
    pub const PARTICIPANT: &str = "participant";
}

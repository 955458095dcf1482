//! Arena Import - Problem Import Service
//!
//! This library provides the problem import pipeline for the Arena
//! competitive programming platform: batches of externally authored problem
//! definitions are parsed, validated row by row, and upserted into the
//! problem bank.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic (batch validation, import)
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

//! Admin import handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/problems/import", post(handler::import_problems))
}

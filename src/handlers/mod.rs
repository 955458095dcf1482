//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod health;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new().merge(health::routes()).nest(
        "/admin",
        admin::routes().route_layer(middleware::from_fn_with_state(state, auth_middleware)),
    )
}

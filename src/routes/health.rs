// src/routes/health.rs
//! API health check endpoint.
//!
//! This module defines the `/health` route used by the hosting platform and CI
//! to verify that the service is running and able to respond to HTTP requests.
//! Following the Explicit Module Boundary Pattern (EMBP):
//! - Internal to this file: the endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/health` route
//!
//! The endpoint also reports whether `SUPABASE_URL` is present. Only the URL is
//! consulted, not the key, so a deployment with a URL but no key still reports
//! `supabase_configured: true` here while `/test-supabase` fails.

use axum::{extract::State, routing::get, Json, Router};

use crate::{AppState, HealthResponse, SupabaseSettings};

/// Handle `GET /health`.
///
/// Always answers 200 and never constructs a client.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    // ---
    let settings = SupabaseSettings::load(state.settings.as_ref());

    Json(HealthResponse {
        status: "healthy".into(),
        message: "Application is running".into(),
        supabase_configured: settings.is_configured(),
    })
}

/// Create a subrouter containing the `/health` route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

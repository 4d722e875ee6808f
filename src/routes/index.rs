// src/routes/index.rs
//! Service description endpoint.
//!
//! `GET /` lists the other routes so a human poking at the deployment can
//! discover them.

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};

use crate::IndexResponse;

/// Handle `GET /`.
async fn index() -> Json<IndexResponse> {
    // ---
    let endpoints = BTreeMap::from([
        (
            "/health".to_string(),
            "Health check endpoint (no Supabase dependency)".to_string(),
        ),
        (
            "/test-supabase".to_string(),
            "Test Supabase connection".to_string(),
        ),
    ]);

    Json(IndexResponse {
        message: "GitHub-Render-Supabase Trial App".into(),
        status: "running".into(),
        endpoints,
    })
}

/// Create a subrouter containing the `/` route.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, info, warn};

use crate::{AppState, SupabaseSettings, TestResponse};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/test-supabase", get(handler))
}

/// Handle `GET /test-supabase`.
///
/// Reads the settings fresh, then asks the factory for a client. Every
/// failure is reported in this response with a 500; nothing is retried.
async fn handler(State(state): State<AppState>) -> (StatusCode, Json<TestResponse>) {
    // ---
    let settings = SupabaseSettings::load(state.settings.as_ref());

    let Some((url, key)) = settings.credentials() else {
        warn!(
            "GET /test-supabase - settings incomplete (url: {}, key: {})",
            settings.url.as_deref().unwrap_or("not set"),
            settings.masked_key()
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TestResponse::missing_config(&settings)),
        );
    };

    match state.factory.create(url, key) {
        Ok(client) => {
            info!("GET /test-supabase - client initialized for {}", client.url());
            (StatusCode::OK, Json(TestResponse::success(url)))
        }
        Err(e) => {
            error!("GET /test-supabase - client construction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TestResponse::failed(url, &e)),
            )
        }
    }
}

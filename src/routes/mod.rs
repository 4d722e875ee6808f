use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

use crate::{ClientFactory, SettingsSource};

mod health;
mod index;
mod test_supabase;

// ---

/// Shared state handed to every handler.
///
/// Handlers read settings through `settings` on each request and build clients
/// through `factory`; nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn SettingsSource>,
    pub factory: Arc<dyn ClientFactory>,
}

impl AppState {
    pub fn new(
        settings: impl SettingsSource + 'static,
        factory: impl ClientFactory + 'static,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            factory: Arc::new(factory),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(test_supabase::router())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
}

/// Span wrapping one HTTP request, tagged with a fresh request id.
fn make_request_span(request: &Request<Body>) -> Span {
    // ---
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %Uuid::new_v4(),
    )
}

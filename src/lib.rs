//! Health check and Supabase connectivity test service.
//!
//! The crate exposes three HTTP routes (`/`, `/health`, `/test-supabase`).
//! Modules follow the Explicit Module Boundary Pattern (EMBP): `routes/*.rs`
//! only import from this gateway, never from `config` or `supabase` directly,
//! so the module layout can change without touching handlers.

mod config;
mod models;
mod routes;
mod supabase;

pub use config::{
    load_from, load_from_env, ProcessEnv, ServerConfig, SettingsSource, SupabaseSettings,
    SUPABASE_KEY, SUPABASE_URL,
};
pub use models::{HealthResponse, IndexResponse, TestDetails, TestResponse};
pub use routes::{router, AppState};
pub use supabase::{ClientError, ClientFactory, SupabaseClient, SupabaseClientFactory};

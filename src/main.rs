//! Application entry point for the `supabase-probe` service.
//!
//! This binary orchestrates the startup sequence:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Probing the Supabase settings once so misconfiguration shows up in the log
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `SUPABASE_URL` – Supabase project URL (read per request)
//! - `SUPABASE_KEY` – Supabase API key (read per request)
//! - `PORT` (optional) – listen port (default: 5000)
//! - `FLASK_ENV` (optional) – `production` lowers the default log level to `info`
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity, overrides the mode default
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use std::{env, io::IsTerminal, net::SocketAddr};

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use supabase_probe::{
    load_from_env, router, AppState, ClientFactory, ProcessEnv, SupabaseClientFactory,
    SupabaseSettings,
};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();

    let cfg = load_from_env()?;
    init_tracing(cfg.debug);
    cfg.log_config();

    probe_supabase();

    // Build app from routes gateway (EMBP)
    let app: Router = router(AppState::new(ProcessEnv, SupabaseClientFactory));

    let addr = SocketAddr::from((cfg.host, cfg.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Try building a client once at startup and log the outcome.
///
/// The handle is dropped immediately; `/test-supabase` builds its own on every
/// request. A failure here never stops the server from starting.
fn probe_supabase() {
    // ---
    let settings = SupabaseSettings::load(&ProcessEnv);

    let Some((url, key)) = settings.credentials() else {
        tracing::warn!(
            "Supabase not configured (SUPABASE_URL: {}, SUPABASE_KEY: {})",
            settings.url.as_deref().unwrap_or("not set"),
            settings.masked_key()
        );
        return;
    };

    match SupabaseClientFactory.create(url, key) {
        Ok(client) => tracing::info!(
            "Supabase client initialized for {} (key {})",
            client.url(),
            settings.masked_key()
        ),
        Err(e) => tracing::warn!("Error initializing Supabase: {}", e),
    }
}

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by `RUST_LOG`, then `AXUM_LOG_LEVEL`, then the run
///   mode (`debug` in debug mode, `info` in production)
///
/// Called once at startup, before the first log line.
fn init_tracing(debug: bool) {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to AXUM_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ if debug => "debug",
            _ => "info",
        };
        EnvFilter::new(format!("{level},hyper=info,reqwest=info"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

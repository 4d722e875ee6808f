//! Configuration loader for the `supabase-probe` service.
//!
//! Two kinds of configuration live here:
//! - [`ServerConfig`]: process settings read once at startup (port, run mode).
//! - [`SupabaseSettings`]: the remote endpoint and access key, read fresh from a
//!   [`SettingsSource`] on every request that needs them.
//!
//! Keeping every `env::var` call in this module means handlers never touch the
//! process environment directly.
use std::{collections::HashMap, env};

use anyhow::{anyhow, Result};

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";

const DEFAULT_PORT: u16 = 5000;

/// Parse an optional integer setting with a default value.
macro_rules! parse_env_u16 {
    ($source:expr, $var_name:expr, $default:expr) => {
        $source
            .get($var_name)
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Startup configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // ---
    /// Address the listener binds to. Always all interfaces.
    pub host: [u8; 4],

    /// TCP port, from `PORT`.
    pub port: u16,

    /// `false` when `FLASK_ENV=production`.
    pub debug: bool,
}

/// Load server configuration from environment variables with defaults.
///
/// Optional:
/// - `PORT` – listen port (default: 5000)
/// - `FLASK_ENV` – `production` disables debug mode
///
/// Returns an error if `PORT` is set but is not a valid port number.
pub fn load_from_env() -> Result<ServerConfig> {
    load_from(&ProcessEnv)
}

/// Load server configuration from any [`SettingsSource`].
pub fn load_from(source: &dyn SettingsSource) -> Result<ServerConfig> {
    // ---
    let port = parse_env_u16!(source, "PORT", DEFAULT_PORT);
    let debug = source.get("FLASK_ENV").as_deref() != Some("production");

    Ok(ServerConfig {
        host: [0, 0, 0, 0],
        port,
        debug,
    })
}

impl ServerConfig {
    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  PORT      : {}", self.port);
        tracing::info!(
            "  MODE      : {}",
            if self.debug { "debug" } else { "production" }
        );
    }
}

// ---

/// A named string lookup the request handlers read settings from.
pub trait SettingsSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads settings from the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SettingsSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl SettingsSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Snapshot of the remote service settings taken for a single request.
///
/// An empty value is treated the same as an unset one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupabaseSettings {
    pub url: Option<String>,
    pub key: Option<String>,
}

impl SupabaseSettings {
    /// Read `SUPABASE_URL` and `SUPABASE_KEY` from `source`. Never fails.
    pub fn load(source: &dyn SettingsSource) -> Self {
        // ---
        let non_empty = |name: &str| source.get(name).filter(|v: &String| !v.is_empty());

        Self {
            url: non_empty(SUPABASE_URL),
            key: non_empty(SUPABASE_KEY),
        }
    }

    /// Whether the endpoint is configured. The key is not consulted.
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Both values, or `None` if either is missing.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.url.as_deref()?, self.key.as_deref()?))
    }

    /// Access key reduced to a short prefix, safe for logs.
    pub fn masked_key(&self) -> String {
        // ---
        match &self.key {
            Some(key) => {
                let prefix: String = key.chars().take(6).collect();
                format!("{prefix}****")
            }
            None => "not set".to_string(),
        }
    }
}

//! Remote client factory for the Supabase REST endpoint.
//!
//! Construction is purely local: the URL and key are checked for shape and a
//! `reqwest::Client` is prepared with the auth headers, but nothing is sent
//! over the network. A successful [`SupabaseClient`] therefore means "well
//! formed", not "reachable".

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use thiserror::Error;
use url::Url;

/// Shape of a Supabase API key (a JWT, optionally without signature).
static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_=]+\.[A-Za-z0-9\-_=]+\.?[A-Za-z0-9\-_.+/=]*$")
        .expect("key pattern is valid")
});

/// Reasons client construction can fail.
///
/// `Display` gives the short message reported to callers; `InvalidUrl` keeps
/// the parser detail for logs only.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("supabase_url is required")]
    MissingUrl,

    #[error("supabase_key is required")]
    MissingKey,

    #[error("Invalid URL")]
    InvalidUrl(String),

    #[error("Invalid API key")]
    InvalidKey,

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Opaque handle to a configured (not necessarily connected) Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    url: Url,
    rest_url: Url,
    #[allow(dead_code)]
    http: reqwest::Client,
}

impl SupabaseClient {
    /// Project URL the client was built for.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// PostgREST base, `<url>/rest/v1`.
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }
}

/// Builds client handles. Implementations must not panic.
pub trait ClientFactory: Send + Sync {
    fn create(&self, url: &str, key: &str) -> Result<SupabaseClient, ClientError>;
}

/// Default factory used by the running service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupabaseClientFactory;

impl ClientFactory for SupabaseClientFactory {
    fn create(&self, url: &str, key: &str) -> Result<SupabaseClient, ClientError> {
        // ---
        if url.is_empty() {
            return Err(ClientError::MissingUrl);
        }
        if key.is_empty() {
            return Err(ClientError::MissingKey);
        }

        let parsed = parse_project_url(url).inspect_err(|e| {
            if let ClientError::InvalidUrl(detail) = e {
                tracing::debug!("Rejected Supabase URL {}: {}", url, detail);
            }
        })?;
        if !KEY_PATTERN.is_match(key) {
            return Err(ClientError::InvalidKey);
        }

        let rest_url = parsed
            .join("rest/v1")
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .default_headers(auth_headers(key)?)
            .build()?;

        tracing::debug!("Supabase client prepared for {}", rest_url);

        Ok(SupabaseClient {
            url: parsed,
            rest_url,
            http,
        })
    }
}

// ---

/// Parse the project URL, accepting only `http`/`https` with a host.
///
/// A trailing slash is ensured so relative joins land under the project root.
fn parse_project_url(raw: &str) -> Result<Url, ClientError> {
    // ---
    let mut url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ClientError::InvalidUrl("missing host".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn auth_headers(key: &str) -> Result<HeaderMap, ClientError> {
    // ---
    let invalid = |_| ClientError::InvalidKey;

    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_str(key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?,
    );
    Ok(headers)
}

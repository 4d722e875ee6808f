//! JSON response envelopes returned by the routes.
//!
//! Every envelope carries a `status` and a `message`; the remaining fields
//! depend on the route and outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SupabaseSettings;

// ---

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub status: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub supabase_configured: bool,
}

/// Body of every `GET /test-supabase` outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub details: TestDetails,
}

/// `details` of a `/test-supabase` envelope, one shape per outcome.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestDetails {
    /// Client built successfully.
    Connected {
        url: String,
        connection_test: String,
        client_initialized: bool,
        note: String,
    },
    /// One or both settings absent.
    MissingConfig {
        #[serde(rename = "SUPABASE_URL")]
        supabase_url: String,
        #[serde(rename = "SUPABASE_KEY")]
        supabase_key: String,
    },
    /// Client construction failed.
    Failed { url: String },
}

fn presence(value: &Option<String>) -> String {
    if value.is_some() { "set" } else { "not set" }.to_string()
}

impl TestResponse {
    // ---
    pub fn success(url: &str) -> Self {
        // ---
        Self {
            status: "success".into(),
            message: "Supabase connection successful".into(),
            error: None,
            details: TestDetails::Connected {
                url: url.to_string(),
                connection_test: "passed".into(),
                client_initialized: true,
                note: "Client successfully initialized. To test database operations, \
                       ensure you have tables set up in Supabase."
                    .into(),
            },
        }
    }

    pub fn missing_config(settings: &SupabaseSettings) -> Self {
        // ---
        Self {
            status: "error".into(),
            message: "Supabase environment variables not configured".into(),
            error: None,
            details: TestDetails::MissingConfig {
                supabase_url: presence(&settings.url),
                supabase_key: presence(&settings.key),
            },
        }
    }

    pub fn failed(url: &str, error: impl ToString) -> Self {
        // ---
        Self {
            status: "error".into(),
            message: "Failed to connect to Supabase".into(),
            error: Some(error.to_string()),
            details: TestDetails::Failed {
                url: url.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        // ---
        let body = serde_json::to_value(TestResponse::success("https://x.supabase.co")).unwrap();

        assert_eq!(
            body,
            json!({
                "status": "success",
                "message": "Supabase connection successful",
                "details": {
                    "url": "https://x.supabase.co",
                    "connection_test": "passed",
                    "client_initialized": true,
                    "note": "Client successfully initialized. To test database operations, ensure you have tables set up in Supabase."
                }
            })
        );
    }

    #[test]
    fn test_missing_config_envelope_shape() {
        // ---
        let settings = SupabaseSettings {
            url: None,
            key: Some("k".into()),
        };
        let body = serde_json::to_value(TestResponse::missing_config(&settings)).unwrap();

        assert_eq!(body["status"], "error");
        assert_eq!(body["details"]["SUPABASE_URL"], "not set");
        assert_eq!(body["details"]["SUPABASE_KEY"], "set");
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_failed_envelope_shape() {
        // ---
        let body =
            serde_json::to_value(TestResponse::failed("https://x.supabase.co", "boom")).unwrap();

        assert_eq!(body["message"], "Failed to connect to Supabase");
        assert_eq!(body["error"], "boom");
        assert_eq!(body["details"], json!({ "url": "https://x.supabase.co" }));
    }
}

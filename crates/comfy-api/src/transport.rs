// Shared transport configuration for building reqwest::Client instances.
//
// Keeps timeout and identification headers in one place so the session
// and any future API surface construct identical clients.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

/// Application identification headers the cloud API requires on every call.
const APP_TYPE: &str = "1";
const APP_VERSION: &str = "1.19.0";

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// The app-identification headers ride on every request as defaults;
    /// the per-request auth token header is applied by the session.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut headers = HeaderMap::new();
        headers.insert("X-APP-TYPE", HeaderValue::from_static(APP_TYPE));
        headers.insert("X-APP-VERSION", HeaderValue::from_static(APP_VERSION));

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("comfy/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(client)
    }
}

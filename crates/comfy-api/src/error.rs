use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `comfy-api` crate.
///
/// Covers every failure mode of the session surface: authentication,
/// transport, service-reported response errors, token persistence, and
/// payload decoding. `comfy-core` maps these into user-facing variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Service ─────────────────────────────────────────────────────
    /// Structured error reported by the service, decoded from its
    /// `{message, code}` envelope. `message` is human-readable text
    /// intended for display.
    #[error("{message}")]
    Response {
        message: String,
        code: Option<i64>,
        status: u16,
    },

    // ── Token persistence ───────────────────────────────────────────
    /// Reading or writing the on-disk access token failed.
    #[error("token store at {path} failed: {source}")]
    TokenStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

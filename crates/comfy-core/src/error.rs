// ── Core error types ──
//
// User-facing errors from comfy-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<comfy_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    /// A flag value outside the enumerated set reached the resolver.
    ///
    /// The CLI restricts input to the known variant names, so hitting this
    /// means a caller bypassed that layer.
    #[error("'{value}' is not a valid {category}")]
    InvalidOption {
        category: &'static str,
        value: String,
    },

    /// Device position outside the directory's `[1, count]` range.
    #[error("device #{position} not found, valid device positions are 1 to {count}")]
    DeviceNotFound { position: usize, count: usize },

    /// A `set` invocation supplied no attribute flags at all.
    #[error("nothing to set: supply at least one attribute flag")]
    EmptyUpdate,

    // ── Session errors ───────────────────────────────────────────────
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Service-reported failure. Carries only the service's own message
    /// text, which is what the user sees.
    #[error("{message}")]
    Session { message: String },

    #[error("cannot reach the climate service: {reason}")]
    ConnectionFailed { reason: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<comfy_api::Error> for CoreError {
    fn from(err: comfy_api::Error) -> Self {
        match err {
            comfy_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            comfy_api::Error::Response { message, .. } => CoreError::Session { message },
            comfy_api::Error::Transport(ref e) => {
                if e.is_timeout() || e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Session {
                        message: e.to_string(),
                    }
                }
            }
            comfy_api::Error::InvalidUrl(e) => CoreError::Internal(format!("invalid URL: {e}")),
            comfy_api::Error::TokenStore { path, source } => CoreError::Internal(format!(
                "token store at {} failed: {source}",
                path.display()
            )),
            comfy_api::Error::Deserialization { message, .. } => {
                CoreError::Internal(format!("malformed service response: {message}"))
            }
        }
    }
}

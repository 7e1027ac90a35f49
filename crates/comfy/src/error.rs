//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use comfy_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the climate service")]
    #[diagnostic(
        code(comfy::connection_failed),
        help("Check your network connection.\nReason: {reason}")
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(comfy::auth_failed),
        help(
            "Verify your username and password.\n\
             Run: comfy config init"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(comfy::no_credentials),
        help(
            "Configure credentials with: comfy config init\n\
             Or set COMFY_USERNAME and COMFY_PASSWORD environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Devices ──────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(comfy::device_not_found), help("Run: comfy list"))]
    DeviceNotFound { message: String },

    // ── Service ──────────────────────────────────────────────────────
    /// Service-reported failure; shown with the service's own text.
    #[error("{message}")]
    #[diagnostic(code(comfy::service_error))]
    Service { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(comfy::validation))]
    Validation { field: String, reason: String },

    #[error("Nothing to set: supply at least one attribute flag")]
    #[diagnostic(
        code(comfy::empty_update),
        help("Pass at least one of -p, -t, -f, -m, -e, -y, -x. See: comfy set --help")
    )]
    EmptyUpdate,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(comfy::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: comfy config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(comfy::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON rendering failed: {0}")]
    #[diagnostic(code(comfy::json))]
    Json(#[from] serde_json::Error),

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {message}")]
    #[diagnostic(code(comfy::internal))]
    Internal { message: String },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::DeviceNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::EmptyUpdate => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidOption { category, value } => CliError::Validation {
                field: category.into(),
                reason: format!("'{value}' is not a valid {category}"),
            },

            CoreError::DeviceNotFound { .. } => CliError::DeviceNotFound {
                message: err.to_string(),
            },

            CoreError::EmptyUpdate => CliError::EmptyUpdate,

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Session { message } => CliError::Service { message },

            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },

            CoreError::Internal(message) => CliError::Internal { message },
        }
    }
}

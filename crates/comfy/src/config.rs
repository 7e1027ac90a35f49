//! CLI-owned configuration: TOML profiles and credential resolution.
//!
//! The core and API crates never see these types; they receive a
//! pre-built `SessionConfig`. Resolution precedence for every setting is
//! CLI flag > environment variable > profile > built-in default (clap
//! folds the env layer into the flag, so here it is flag > profile).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use comfy_api::{SessionConfig, TransportConfig, DEFAULT_BASE_URL};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Named account profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// One cloud account.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Account username (usually an email address).
    pub username: Option<String>,

    /// Account password (plaintext -- prefer the COMFY_PASSWORD env var).
    pub password: Option<String>,

    /// Where to persist the access token for this profile.
    pub token_file: Option<PathBuf>,

    /// Service base URL override.
    pub api_url: Option<String>,
}

// ── Paths ────────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "comfy", "comfy")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| dirs_fallback().join("config.toml"))
}

/// Default token file for a profile, under the platform data directory.
pub fn default_token_path(profile_name: &str) -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(format!("{profile_name}.token")))
        .unwrap_or_else(|| dirs_fallback().join(format!("{profile_name}.token")))
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("comfy");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("COMFY_CONFIG_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `SessionConfig` for this invocation.
///
/// This is the single boundary where CLI config types cross into API
/// types. An explicitly named profile must exist; the implicit default
/// profile may be absent as long as flags or env supply credentials.
pub fn build_session_config(global: &GlobalOpts) -> Result<SessionConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let unconfigured = Profile::default();
    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile,
        None if global.profile.is_some() => {
            let available: Vec<_> = cfg.profiles.keys().cloned().collect();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => &unconfigured,
    };

    // 1. Credentials (flag > env > profile)
    let username = global
        .username
        .clone()
        .or_else(|| profile.username.clone())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.clone(),
        })?;

    let password = global
        .password
        .clone()
        .or_else(|| profile.password.clone())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.clone(),
        })?;

    // 2. Token persistence
    let token_path = global
        .token_file
        .clone()
        .or_else(|| profile.token_file.clone())
        .unwrap_or_else(|| default_token_path(&profile_name));

    // 3. Service URL
    let url_str = global
        .api_url
        .as_deref()
        .or(profile.api_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);
    let base_url: Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    Ok(SessionConfig {
        base_url,
        username,
        password: SecretString::from(password),
        token_path,
        transport: TransportConfig {
            timeout: Duration::from_secs(global.timeout),
        },
    })
}

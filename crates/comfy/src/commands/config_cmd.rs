//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;

// ── Helpers ─────────────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("comfy configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let username: String = Input::new()
                .with_prompt("Account username (email)")
                .interact_text()
                .map_err(prompt_err)?;

            let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;

            if username.is_empty() || password.is_empty() {
                return Err(CliError::Validation {
                    field: "credentials".into(),
                    reason: "username and password cannot be empty".into(),
                });
            }

            let profile = Profile {
                username: Some(username),
                password: Some(password),
                token_file: None,
                api_url: None,
            };

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(profile_name.clone(), profile);
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(profile_name.clone());
            }
            save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: comfy list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            println!("config file     : {}", config::config_path().display());
            println!("active profile  : {profile_name}");
            if cfg.profiles.is_empty() {
                println!("profiles        : (none, run `comfy config init`)");
                return Ok(());
            }
            for (name, profile) in redacted(&cfg.profiles) {
                println!("[profiles.{name}]");
                if let Some(ref username) = profile.username {
                    println!("  username   = {username}");
                }
                if profile.password.is_some() {
                    println!("  password   = ********");
                }
                if let Some(ref token_file) = profile.token_file {
                    println!("  token_file = {}", token_file.display());
                }
                if let Some(ref api_url) = profile.api_url {
                    println!("  api_url    = {api_url}");
                }
            }
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}

/// Profiles in stable name order; passwords never leave this module.
fn redacted(profiles: &HashMap<String, Profile>) -> Vec<(&String, &Profile)> {
    let mut entries: Vec<_> = profiles.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

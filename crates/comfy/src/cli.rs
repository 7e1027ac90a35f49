//! Clap derive structures for the `comfy` CLI.
//!
//! Defines the command tree, global flags, and the flag vocabulary for
//! `set`. Enumerated flags are restricted at parse time to the variant
//! names exported by `comfy-core` -- an unknown name never reaches the
//! command layer.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use strum::VariantNames;

use comfy_core::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, OperationMode, Power,
};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// comfy -- read and change the state of cloud-connected climate devices
#[derive(Debug, Parser)]
#[command(
    name = "comfy",
    version,
    about = "Read or change the status of cloud-connected climate devices",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'P', env = "COMFY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Account username (overrides profile)
    #[arg(long, short = 'u', env = "COMFY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Account password (overrides profile)
    #[arg(long, env = "COMFY_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// File to persist the access token in
    #[arg(long, env = "COMFY_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    /// Cloud service base URL
    #[arg(long, env = "COMFY_API_URL", global = true, hide = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short = 'o', env = "COMFY_OUTPUT", default_value = "tree", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error status output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "COMFY_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Indented key/value tree (default, interactive)
    Tree,
    /// Pretty-printed JSON
    Json,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered devices with their positions
    #[command(alias = "ls")]
    List,

    /// Read the current state of a device
    Get {
        /// Device position (1-based, from `comfy list`)
        device: usize,
    },

    /// Change the state of a device
    ///
    /// Only the attributes you pass are changed; everything else is left
    /// untouched.
    Set(SetArgs),

    /// Dump the raw service data of a device
    Dump {
        /// Device position (1-based, from `comfy list`)
        device: usize,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── SET ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Device position (1-based, from `comfy list`)
    pub device: usize,

    /// Power mode
    #[arg(short = 'p', long, value_parser = PossibleValuesParser::new(Power::VARIANTS))]
    pub power: Option<String>,

    /// Target temperature in °C
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Fan speed
    #[arg(short = 'f', long, value_parser = PossibleValuesParser::new(FanSpeed::VARIANTS))]
    pub fan_speed: Option<String>,

    /// Operation mode
    #[arg(short = 'm', long, value_parser = PossibleValuesParser::new(OperationMode::VARIANTS))]
    pub mode: Option<String>,

    /// Eco mode
    #[arg(short = 'e', long, value_parser = PossibleValuesParser::new(EcoMode::VARIANTS))]
    pub eco: Option<String>,

    /// Vertical position of the air swing
    #[arg(short = 'y', long, value_parser = PossibleValuesParser::new(AirSwingVertical::VARIANTS))]
    pub air_swing_vertical: Option<String>,

    /// Horizontal position of the air swing
    #[arg(short = 'x', long, value_parser = PossibleValuesParser::new(AirSwingHorizontal::VARIANTS))]
    pub air_swing_horizontal: Option<String>,
}

// ── CONFIG ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the initial config file with guided setup
    Init,

    /// Display the current configuration (passwords redacted)
    Show,

    /// Print the config file path
    Path,
}

// ── COMPLETIONS ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

//! Report rendering for the CLI.
//!
//! Reports come out of core as insertion-ordered trees; this module turns
//! them into the indented key/value listing (default) or pretty JSON.
//! Status lines about which device an operation targeted go to stderr so
//! stdout stays machine-consumable.

use comfy_core::{DeviceReport, DeviceSummary};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Print a device report to stdout in the selected format.
pub fn print_report(report: &DeviceReport, global: &GlobalOpts) -> Result<(), CliError> {
    match global.output {
        OutputFormat::Tree => {
            for line in report.render() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

/// Announce which device an operation targeted, on stderr.
///
/// Suppressed by --quiet and in JSON mode, where stdout carries the
/// payload and nothing else should be added around it.
pub fn print_device_heading(verb: &str, position: usize, device: &DeviceSummary, global: &GlobalOpts) {
    if global.quiet || matches!(global.output, OutputFormat::Json) {
        return;
    }
    eprintln!("{verb} '{}' (device #{position})", device.name);
}

/// One line of `comfy list` output for a device at its position.
pub fn device_line(position: usize, device: &DeviceSummary) -> String {
    format!(
        "#{position} - group: '{}', name: '{}', model: '{}'",
        device.group, device.name, device.model
    )
}

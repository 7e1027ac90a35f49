//! Device command handlers: list, get, set, dump.

use comfy_core::{
    AirSwingHorizontal, AirSwingVertical, ClimateSession, Controller, DeviceUpdate, EcoMode,
    FanSpeed, OperationMode, Power,
};

use crate::cli::{GlobalOpts, SetArgs};
use crate::error::CliError;
use crate::output;

/// `comfy list` -- one line per device, 1-based positions.
pub async fn list<S: ClimateSession>(controller: &Controller<S>) -> Result<(), CliError> {
    let directory = controller.directory().await?;
    if directory.is_empty() {
        eprintln!("No devices registered on this account.");
        return Ok(());
    }
    for (position, device) in directory.entries() {
        println!("{}", output::device_line(position, device));
    }
    Ok(())
}

/// `comfy get <device>` -- current state as a report.
pub async fn get<S: ClimateSession>(
    controller: &Controller<S>,
    position: usize,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (device, report) = controller.read_state(position).await?;
    output::print_device_heading("Reading", position, &device, global);
    output::print_report(&report, global)
}

/// `comfy set <device> [flags]` -- sparse state change.
pub async fn set<S: ClimateSession>(
    controller: &Controller<S>,
    args: SetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let update = build_update(&args)?;
    let device = controller.write_state(args.device, &update).await?;
    if !global.quiet {
        eprintln!(
            "Updated '{}' (device #{}): {}",
            device.name,
            args.device,
            update.attribute_names().join(", ")
        );
    }
    Ok(())
}

/// `comfy dump <device>` -- raw service data.
pub async fn dump<S: ClimateSession>(
    controller: &Controller<S>,
    position: usize,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (device, report) = controller.dump(position).await?;
    output::print_device_heading("Dumping", position, &device, global);
    output::print_report(&report, global)
}

/// Translate `set` flags into a sparse update.
///
/// Enumerated flags arrive pre-screened by clap's possible-values parser;
/// the resolvers here are the authoritative check and would reject any
/// name that slipped past it.
fn build_update(args: &SetArgs) -> Result<DeviceUpdate, CliError> {
    Ok(DeviceUpdate {
        power: args.power.as_deref().map(Power::resolve).transpose()?,
        temperature: args.temperature,
        fan_speed: args.fan_speed.as_deref().map(FanSpeed::resolve).transpose()?,
        mode: args.mode.as_deref().map(OperationMode::resolve).transpose()?,
        eco: args.eco.as_deref().map(EcoMode::resolve).transpose()?,
        air_swing_vertical: args
            .air_swing_vertical
            .as_deref()
            .map(AirSwingVertical::resolve)
            .transpose()?,
        air_swing_horizontal: args
            .air_swing_horizontal
            .as_deref()
            .map(AirSwingHorizontal::resolve)
            .transpose()?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use comfy_core::{FanSpeed, OperationMode, Power};

    use super::build_update;
    use crate::cli::SetArgs;

    fn bare_args() -> SetArgs {
        SetArgs {
            device: 1,
            power: None,
            temperature: None,
            fan_speed: None,
            mode: None,
            eco: None,
            air_swing_vertical: None,
            air_swing_horizontal: None,
        }
    }

    #[test]
    fn flags_translate_to_the_matching_attributes() {
        let update = build_update(&SetArgs {
            power: Some("On".into()),
            temperature: Some(21.5),
            fan_speed: Some("Low".into()),
            mode: Some("Cool".into()),
            ..bare_args()
        })
        .unwrap();

        assert_eq!(update.power, Some(Power::On));
        assert_eq!(update.temperature, Some(21.5));
        assert_eq!(update.fan_speed, Some(FanSpeed::Low));
        assert_eq!(update.mode, Some(OperationMode::Cool));
        assert_eq!(update.eco, None);
    }

    #[test]
    fn no_flags_yields_an_empty_update() {
        let update = build_update(&bare_args()).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn unknown_option_name_is_rejected() {
        let err = build_update(&SetArgs {
            mode: Some("Turbo".into()),
            ..bare_args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("Turbo"), "got: {err}");
    }
}

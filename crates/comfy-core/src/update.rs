//! Sparse device-state updates.

use serde::Serialize;

use crate::options::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, OperationMode, Power,
};

/// A partial desired-state change for one device.
///
/// Only attributes the caller explicitly supplied are `Some`; everything
/// else is `None` and is never transmitted. `None` means "leave unchanged"
/// -- there is no way to express "reset to default" through this type,
/// by contract with the session layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceUpdate {
    pub power: Option<Power>,
    pub temperature: Option<f64>,
    pub fan_speed: Option<FanSpeed>,
    pub mode: Option<OperationMode>,
    pub eco: Option<EcoMode>,
    pub air_swing_vertical: Option<AirSwingVertical>,
    pub air_swing_horizontal: Option<AirSwingHorizontal>,
}

impl DeviceUpdate {
    /// True when no attribute was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.attribute_names().is_empty()
    }

    /// Names of the attributes present in this update, in protocol order.
    pub fn attribute_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.power.is_some() {
            names.push("power");
        }
        if self.temperature.is_some() {
            names.push("temperature");
        }
        if self.fan_speed.is_some() {
            names.push("fanSpeed");
        }
        if self.mode.is_some() {
            names.push("mode");
        }
        if self.eco.is_some() {
            names.push("eco");
        }
        if self.air_swing_vertical.is_some() {
            names.push("airSwingVertical");
        }
        if self.air_swing_horizontal.is_some() {
            names.push("airSwingHorizontal");
        }
        names
    }
}

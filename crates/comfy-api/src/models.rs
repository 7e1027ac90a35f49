//! Wire DTOs for the cloud API.
//!
//! Field names mirror the service's camelCase JSON. Everything here is
//! transport-shaped; domain translation lives in `comfy-core`.

use serde::{Deserialize, Serialize};

// ── Authentication ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    /// Interface language; 0 selects English.
    pub language: u8,
    pub login_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub u_token: String,
}

// ── Device listing ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupListResponse {
    #[serde(default)]
    pub group_list: Vec<DeviceGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeviceGroup {
    pub group_name: String,
    #[serde(default)]
    pub device_list: Vec<GroupDevice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupDevice {
    pub device_guid: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub device_module_number: String,
}

/// One registered device, flattened out of its group.
///
/// `id` is the service's opaque device GUID -- stable per device, unlike
/// the display position the CLI exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub id: String,
    pub group: String,
    pub name: String,
    pub model: String,
}

// ── Device status ────────────────────────────────────────────────────

/// Decoded `deviceStatus/now` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceStatus {
    pub parameters: DeviceParameters,
}

/// Current device parameters as reported by the service.
///
/// All fields are optional: the service omits parameters a given device
/// model does not support.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceParameters {
    pub operate: Option<i32>,
    pub operation_mode: Option<i32>,
    pub temperature_set: Option<f64>,
    pub fan_speed: Option<i32>,
    pub eco_mode: Option<i32>,
    #[serde(rename = "airSwingUD")]
    pub air_swing_vertical: Option<i32>,
    #[serde(rename = "airSwingLR")]
    pub air_swing_horizontal: Option<i32>,
    pub inside_temperature: Option<f64>,
    #[serde(rename = "outTemperature")]
    pub outside_temperature: Option<f64>,
}

// ── Device control ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ControlRequest<'a> {
    pub device_guid: &'a str,
    pub parameters: &'a ControlParameters,
}

/// Sparse control payload: only `Some` fields are serialized.
///
/// The absence of a field means "leave unchanged" -- the service treats
/// missing and present-with-default very differently, so `None` must
/// never serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_set: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco_mode: Option<i32>,
    #[serde(rename = "airSwingUD", skip_serializing_if = "Option::is_none")]
    pub air_swing_vertical: Option<i32>,
    #[serde(rename = "airSwingLR", skip_serializing_if = "Option::is_none")]
    pub air_swing_horizontal: Option<i32>,
}

// ── Error envelope ───────────────────────────────────────────────────

/// The service's error body: `{"message": "...", "code": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: Option<String>,
    pub code: Option<i64>,
}

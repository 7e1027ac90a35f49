//! Wire DTO ↔ domain type conversions.
//!
//! The single boundary where `comfy-api` payloads become domain types.
//! Wire integers map through the option tables in [`options`](crate::options);
//! values outside a known table surface as plain integers instead of
//! failing the whole report.

use comfy_api::{ControlParameters, DeviceRecord, DeviceStatus};
use serde_json::Value;

use crate::model::{DeviceId, DeviceSummary};
use crate::options::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, OperationMode, Power,
};
use crate::report::{DeviceReport, ReportValue, Scalar};
use crate::update::DeviceUpdate;

/// Flattened device record → domain summary.
pub fn device_summary(record: DeviceRecord) -> DeviceSummary {
    DeviceSummary {
        id: DeviceId::new(record.id),
        group: record.group,
        name: record.name,
        model: record.model,
    }
}

fn variant_or_int(value: i32, resolve: impl Fn(i32) -> Option<&'static str>) -> ReportValue {
    match resolve(value) {
        Some(name) => ReportValue::Variant(name),
        None => ReportValue::Scalar(Scalar::Int(i64::from(value))),
    }
}

/// Decoded device status → curated state report.
///
/// Key order matches the read path's display contract: power and mode
/// first, then the numeric temperatures, then the air delivery settings.
pub fn state_report(status: &DeviceStatus) -> DeviceReport {
    let p = &status.parameters;
    let mut parameters = DeviceReport::new();

    if let Some(v) = p.operate {
        parameters.insert("power", variant_or_int(v, |v| Power::from_wire(v).map(Into::into)));
    }
    if let Some(v) = p.operation_mode {
        parameters.insert(
            "mode",
            variant_or_int(v, |v| OperationMode::from_wire(v).map(Into::into)),
        );
    }
    if let Some(v) = p.temperature_set {
        parameters.insert("temperature", ReportValue::Scalar(Scalar::Float(v)));
    }
    if let Some(v) = p.fan_speed {
        parameters.insert(
            "fanSpeed",
            variant_or_int(v, |v| FanSpeed::from_wire(v).map(Into::into)),
        );
    }
    if let Some(v) = p.eco_mode {
        parameters.insert(
            "eco",
            variant_or_int(v, |v| EcoMode::from_wire(v).map(Into::into)),
        );
    }
    if let Some(v) = p.air_swing_vertical {
        parameters.insert(
            "airSwingVertical",
            variant_or_int(v, |v| AirSwingVertical::from_wire(v).map(Into::into)),
        );
    }
    if let Some(v) = p.air_swing_horizontal {
        parameters.insert(
            "airSwingHorizontal",
            variant_or_int(v, |v| AirSwingHorizontal::from_wire(v).map(Into::into)),
        );
    }
    if let Some(v) = p.inside_temperature {
        parameters.insert("temperatureInside", ReportValue::Scalar(Scalar::Float(v)));
    }
    if let Some(v) = p.outside_temperature {
        parameters.insert("temperatureOutside", ReportValue::Scalar(Scalar::Float(v)));
    }

    let mut report = DeviceReport::new();
    report.insert("parameters", ReportValue::Nested(parameters));
    report
}

/// Sparse domain update → sparse wire parameters.
///
/// Attributes absent from the update stay `None` and are skipped during
/// serialization; the service must never see them.
pub fn control_parameters(update: &DeviceUpdate) -> ControlParameters {
    ControlParameters {
        operate: update.power.map(Power::wire_value),
        operation_mode: update.mode.map(OperationMode::wire_value),
        temperature_set: update.temperature,
        fan_speed: update.fan_speed.map(FanSpeed::wire_value),
        eco_mode: update.eco.map(EcoMode::wire_value),
        air_swing_vertical: update.air_swing_vertical.map(AirSwingVertical::wire_value),
        air_swing_horizontal: update
            .air_swing_horizontal
            .map(AirSwingHorizontal::wire_value),
    }
}

/// Raw JSON dump → report, preserving the payload's own key order.
///
/// Objects nest, arrays and other non-scalar leaves render as compact
/// JSON text. Nothing is interpreted through the option tables -- dump is
/// deliberately unfiltered.
pub fn json_report(value: &Value) -> DeviceReport {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), json_value(v)))
            .collect(),
        other => {
            let mut report = DeviceReport::new();
            report.insert("value", json_value(other));
            report
        }
    }
}

fn json_value(value: &Value) -> ReportValue {
    match value {
        Value::Object(map) => ReportValue::Nested(
            map.iter()
                .map(|(k, v)| (k.clone(), json_value(v)))
                .collect(),
        ),
        Value::Null => ReportValue::Scalar(Scalar::Null),
        Value::Bool(b) => ReportValue::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ReportValue::Scalar(Scalar::Int(i))
            } else {
                ReportValue::Scalar(Scalar::Float(n.as_f64().unwrap_or_default()))
            }
        }
        Value::String(s) => ReportValue::Scalar(Scalar::Text(s.clone())),
        Value::Array(_) => ReportValue::Scalar(Scalar::Text(value.to_string())),
    }
}

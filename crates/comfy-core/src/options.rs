//! Enumerated option sets for device attributes.
//!
//! Each category is a closed vocabulary: the variant name is the stable
//! CLI-facing spelling (input and output), and the wire value is the opaque
//! integer the cloud service expects. The two directions live side by side
//! as `wire_value()` / `from_wire()` so a rename cannot drift out of sync
//! with the protocol table.
//!
//! Validation is two-layered: the CLI restricts flag input to
//! [`VariantNames::VARIANTS`](strum::VariantNames), and the `resolve`
//! constructors map a name to its variant, failing with
//! [`CoreError::InvalidOption`] for anything else.

use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::error::CoreError;

fn resolve_named<T>(category: &'static str, name: &str) -> Result<T, CoreError>
where
    T: FromStr,
{
    T::from_str(name).map_err(|_| CoreError::InvalidOption {
        category,
        value: name.to_owned(),
    })
}

// ── Power ────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("power mode", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }
}

// ── Fan speed ────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum FanSpeed {
    Auto,
    Low,
    LowMid,
    Mid,
    HighMid,
    High,
}

impl FanSpeed {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("fan speed", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Low => 1,
            Self::LowMid => 2,
            Self::Mid => 3,
            Self::HighMid => 4,
            Self::High => 5,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Auto),
            1 => Some(Self::Low),
            2 => Some(Self::LowMid),
            3 => Some(Self::Mid),
            4 => Some(Self::HighMid),
            5 => Some(Self::High),
            _ => None,
        }
    }
}

// ── Operation mode ───────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum OperationMode {
    Auto,
    Cool,
    Dry,
    Heat,
    Fan,
}

impl OperationMode {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("operation mode", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Dry => 1,
            Self::Cool => 2,
            Self::Heat => 3,
            Self::Fan => 4,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Auto),
            1 => Some(Self::Dry),
            2 => Some(Self::Cool),
            3 => Some(Self::Heat),
            4 => Some(Self::Fan),
            _ => None,
        }
    }
}

// ── Eco mode ─────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum EcoMode {
    Auto,
    Quiet,
    Powerful,
}

impl EcoMode {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("eco mode", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Powerful => 1,
            Self::Quiet => 2,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Auto),
            1 => Some(Self::Powerful),
            2 => Some(Self::Quiet),
            _ => None,
        }
    }
}

// ── Vertical air swing ───────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum AirSwingVertical {
    Auto,
    Down,
    DownMid,
    Mid,
    UpMid,
    Up,
}

impl AirSwingVertical {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("vertical air swing", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Auto => -1,
            Self::Up => 0,
            Self::Down => 1,
            Self::Mid => 2,
            Self::UpMid => 3,
            Self::DownMid => 4,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Self::Auto),
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Mid),
            3 => Some(Self::UpMid),
            4 => Some(Self::DownMid),
            _ => None,
        }
    }
}

// ── Horizontal air swing ─────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum AirSwingHorizontal {
    Auto,
    Left,
    LeftMid,
    Mid,
    RightMid,
    Right,
}

impl AirSwingHorizontal {
    pub fn resolve(name: &str) -> Result<Self, CoreError> {
        resolve_named("horizontal air swing", name)
    }

    pub fn wire_value(self) -> i32 {
        match self {
            Self::Auto => -1,
            Self::Left => 0,
            Self::Right => 1,
            Self::Mid => 2,
            Self::LeftMid => 4,
            Self::RightMid => 5,
        }
    }

    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Self::Auto),
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Mid),
            4 => Some(Self::LeftMid),
            5 => Some(Self::RightMid),
            _ => None,
        }
    }
}

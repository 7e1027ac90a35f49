//! HTTP session for the climate cloud service.
//!
//! Implements the vendor's cloud API surface consumed by the comfy CLI:
//! token-based login with on-disk token reuse, the grouped device listing,
//! per-device status reads, sparse control writes, and the raw status dump.
//!
//! This crate is wire-level only: it speaks DTOs and integers, not domain
//! enums. `comfy-core` owns the translation into domain types and the
//! user-facing error taxonomy.

pub mod error;
pub mod models;
pub mod session;
pub mod token;
pub mod transport;

pub use error::Error;
pub use models::{ControlParameters, DeviceParameters, DeviceRecord, DeviceStatus};
pub use session::{CloudSession, SessionConfig, DEFAULT_BASE_URL};
pub use transport::TransportConfig;

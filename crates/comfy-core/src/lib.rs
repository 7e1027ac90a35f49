//! Domain layer between `comfy-api` and the CLI.
//!
//! This crate owns the business logic and domain model for the comfy
//! workspace:
//!
//! - **[`Controller`]** -- Facade over one CLI invocation's lifecycle:
//!   [`connect()`](Controller::connect) authenticates the session, then the
//!   four device operations (list, read, write, dump) run strictly
//!   sequentially against it. The device directory is fetched at most once
//!   per invocation.
//!
//! - **[`ClimateSession`]** -- The injected session boundary. `comfy-api`
//!   provides the real HTTP implementation; tests provide mocks. Core never
//!   sees HTTP status codes or wire JSON.
//!
//! - **Enumerated options** ([`options`]) -- Closed, named vocabularies
//!   (power, fan speed, operation mode, eco mode, swing positions) with a
//!   bidirectional name ↔ wire-value table per category.
//!
//! - **[`DeviceReport`]** -- Insertion-ordered tree of scalars, option
//!   variants, and nested maps, rendered by the CLI as an indented
//!   key/value listing.

pub mod controller;
pub mod convert;
pub mod directory;
pub mod error;
pub mod model;
pub mod options;
pub mod report;
pub mod session;
pub mod update;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controller::Controller;
pub use directory::DeviceDirectory;
pub use error::CoreError;
pub use model::{DeviceId, DeviceSummary};
pub use report::{DeviceReport, ReportValue, Scalar};
pub use session::ClimateSession;
pub use update::DeviceUpdate;

pub use options::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, OperationMode, Power,
};

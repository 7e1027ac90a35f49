//! The injected session boundary and its HTTP-backed implementation.

use std::future::Future;

use tracing::debug;

use crate::convert;
use crate::error::CoreError;
use crate::model::{DeviceId, DeviceSummary};
use crate::report::DeviceReport;
use crate::update::DeviceUpdate;

/// One authenticated exchange surface with the climate cloud service.
///
/// The controller consumes this trait rather than a concrete client so the
/// command logic is testable without network access. The real
/// implementation wraps [`comfy_api::CloudSession`]; tests substitute
/// in-memory mocks.
///
/// All methods are single request/response exchanges; retry, token
/// persistence, and transport concerns live behind the implementation.
pub trait ClimateSession: Send + Sync {
    /// Establish or validate credentials.
    fn login(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// The ordered list of registered devices.
    fn devices(&self) -> impl Future<Output = Result<Vec<DeviceSummary>, CoreError>> + Send;

    /// Read the current state of one device.
    fn device_state(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<DeviceReport, CoreError>> + Send;

    /// Write a sparse desired-state update to one device.
    ///
    /// Only the attributes present in `update` are transmitted; absent
    /// attributes are left unchanged by the service.
    fn apply_update(
        &self,
        id: &DeviceId,
        update: &DeviceUpdate,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Read the raw, unfiltered state report of one device.
    fn dump(&self, id: &DeviceId) -> impl Future<Output = Result<DeviceReport, CoreError>> + Send;
}

impl ClimateSession for comfy_api::CloudSession {
    async fn login(&self) -> Result<(), CoreError> {
        comfy_api::CloudSession::login(self).await?;
        Ok(())
    }

    async fn devices(&self) -> Result<Vec<DeviceSummary>, CoreError> {
        let records = self.get_devices().await?;
        debug!(count = records.len(), "fetched device list");
        Ok(records.into_iter().map(convert::device_summary).collect())
    }

    async fn device_state(&self, id: &DeviceId) -> Result<DeviceReport, CoreError> {
        let status = self.get_device(id.as_str()).await?;
        Ok(convert::state_report(&status))
    }

    async fn apply_update(&self, id: &DeviceId, update: &DeviceUpdate) -> Result<(), CoreError> {
        let parameters = convert::control_parameters(update);
        self.set_device(id.as_str(), &parameters).await?;
        Ok(())
    }

    async fn dump(&self, id: &DeviceId) -> Result<DeviceReport, CoreError> {
        let raw = comfy_api::CloudSession::dump(self, id.as_str()).await?;
        Ok(convert::json_report(&raw))
    }
}

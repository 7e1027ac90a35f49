//! Per-invocation device directory with 1-based positional lookup.

use crate::error::CoreError;
use crate::model::DeviceSummary;

/// Ordered list of known devices, fetched once per invocation.
///
/// Positions are 1-based and display-only: the service may reorder devices
/// between runs, so a position must never be stored or compared across
/// invocations. The service's own [`DeviceId`](crate::DeviceId) is the
/// stable key.
#[derive(Debug, Clone)]
pub struct DeviceDirectory {
    devices: Vec<DeviceSummary>,
}

impl DeviceDirectory {
    /// Build a directory from the session's device list, preserving order.
    pub fn new(devices: Vec<DeviceSummary>) -> Self {
        Self { devices }
    }

    /// Look up a device by its 1-based position.
    ///
    /// Fails with [`CoreError::DeviceNotFound`] for any position outside
    /// `[1, count]`; the error message states that inclusive range.
    pub fn resolve(&self, position: usize) -> Result<&DeviceSummary, CoreError> {
        if position == 0 || position > self.devices.len() {
            return Err(CoreError::DeviceNotFound {
                position,
                count: self.devices.len(),
            });
        }
        Ok(&self.devices[position - 1])
    }

    /// Iterate devices with their 1-based positions, in directory order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &DeviceSummary)> {
        self.devices.iter().enumerate().map(|(i, d)| (i + 1, d))
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

//! Controller facade for one CLI invocation.

use tokio::sync::OnceCell;
use tracing::debug;

use crate::directory::DeviceDirectory;
use crate::error::CoreError;
use crate::model::DeviceSummary;
use crate::report::DeviceReport;
use crate::session::ClimateSession;
use crate::update::DeviceUpdate;

/// Facade tying the session, directory, and device operations together.
///
/// Lifecycle is strictly sequential: [`connect`](Self::connect)
/// authenticates, then exactly one of the device operations runs. The
/// directory is fetched lazily on first positional lookup and cached for
/// the rest of the invocation -- never across invocations, since the
/// service may reorder devices between runs.
pub struct Controller<S> {
    session: S,
    directory: OnceCell<DeviceDirectory>,
}

impl<S: ClimateSession> Controller<S> {
    /// Authenticate the session and wrap it.
    pub async fn connect(session: S) -> Result<Self, CoreError> {
        session.login().await?;
        Ok(Self {
            session,
            directory: OnceCell::new(),
        })
    }

    /// The device directory, fetched from the session at most once.
    pub async fn directory(&self) -> Result<&DeviceDirectory, CoreError> {
        self.directory
            .get_or_try_init(|| async {
                let devices = self.session.devices().await?;
                debug!(count = devices.len(), "device directory materialized");
                Ok(DeviceDirectory::new(devices))
            })
            .await
    }

    /// Resolve a 1-based position to its device summary.
    ///
    /// Position validation happens here, before any read or write reaches
    /// the session -- an out-of-range position never causes a device call.
    pub async fn device_at(&self, position: usize) -> Result<DeviceSummary, CoreError> {
        Ok(self.directory().await?.resolve(position)?.clone())
    }

    /// Read the current state of the device at `position`.
    pub async fn read_state(
        &self,
        position: usize,
    ) -> Result<(DeviceSummary, DeviceReport), CoreError> {
        let device = self.device_at(position).await?;
        let report = self.session.device_state(&device.id).await?;
        Ok((device, report))
    }

    /// Write a sparse update to the device at `position`.
    ///
    /// Returns the device summary so the caller can name the device in its
    /// confirmation line. An empty update is rejected before any network
    /// traffic.
    pub async fn write_state(
        &self,
        position: usize,
        update: &DeviceUpdate,
    ) -> Result<DeviceSummary, CoreError> {
        if update.is_empty() {
            return Err(CoreError::EmptyUpdate);
        }
        let device = self.device_at(position).await?;
        debug!(device = %device.id, attributes = ?update.attribute_names(), "writing device state");
        self.session.apply_update(&device.id, update).await?;
        Ok(device)
    }

    /// Read the raw, unfiltered data of the device at `position`.
    pub async fn dump(&self, position: usize) -> Result<(DeviceSummary, DeviceReport), CoreError> {
        let device = self.device_at(position).await?;
        let report = self.session.dump(&device.id).await?;
        Ok((device, report))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::Controller;
    use crate::error::CoreError;
    use crate::model::{DeviceId, DeviceSummary};
    use crate::options::{OperationMode, Power};
    use crate::report::{DeviceReport, ReportValue, Scalar};
    use crate::session::ClimateSession;
    use crate::update::DeviceUpdate;

    /// Call log entry for the mock session.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Login,
        Devices,
        Read(String),
        Write(String, Vec<&'static str>),
        Dump(String),
    }

    #[derive(Default)]
    struct MockSession {
        devices: Vec<DeviceSummary>,
        read_error: Option<String>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockSession {
        fn with_devices(count: usize) -> Self {
            let devices = (1..=count)
                .map(|i| DeviceSummary {
                    id: DeviceId::new(format!("guid-{i}")),
                    group: "My House".into(),
                    name: format!("Unit {i}"),
                    model: "CS-Z25VKEW".into(),
                })
                .collect();
            Self {
                devices,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().expect("call log").clone()
        }

        fn log(&self, call: Call) {
            self.calls.lock().expect("call log").push(call);
        }
    }

    impl ClimateSession for MockSession {
        async fn login(&self) -> Result<(), CoreError> {
            self.log(Call::Login);
            Ok(())
        }

        async fn devices(&self) -> Result<Vec<DeviceSummary>, CoreError> {
            self.log(Call::Devices);
            Ok(self.devices.clone())
        }

        async fn device_state(&self, id: &DeviceId) -> Result<DeviceReport, CoreError> {
            self.log(Call::Read(id.to_string()));
            if let Some(message) = &self.read_error {
                return Err(CoreError::Session {
                    message: message.clone(),
                });
            }
            let mut report = DeviceReport::new();
            report.insert("power", ReportValue::Variant("On"));
            report.insert("temperature", ReportValue::Scalar(Scalar::Float(21.5)));
            Ok(report)
        }

        async fn apply_update(
            &self,
            id: &DeviceId,
            update: &DeviceUpdate,
        ) -> Result<(), CoreError> {
            self.log(Call::Write(id.to_string(), update.attribute_names()));
            Ok(())
        }

        async fn dump(&self, id: &DeviceId) -> Result<DeviceReport, CoreError> {
            self.log(Call::Dump(id.to_string()));
            Ok(DeviceReport::new())
        }
    }

    #[tokio::test]
    async fn connect_logs_in_before_anything_else() {
        let controller = Controller::connect(MockSession::with_devices(1))
            .await
            .unwrap();
        assert_eq!(controller.session.calls(), [Call::Login]);
    }

    #[tokio::test]
    async fn get_out_of_range_fails_without_a_read_call() {
        let controller = Controller::connect(MockSession::with_devices(3))
            .await
            .unwrap();

        let err = controller.read_state(4).await.unwrap_err();
        match err {
            CoreError::DeviceNotFound { position, count } => {
                assert_eq!((position, count), (4, 3));
            }
            other => panic!("expected DeviceNotFound, got {other:?}"),
        }
        // Directory fetch happened, but no per-device read did.
        assert_eq!(
            controller.session.calls(),
            [Call::Login, Call::Devices]
        );
    }

    #[tokio::test]
    async fn get_in_range_reads_the_device_at_that_offset_once() {
        let controller = Controller::connect(MockSession::with_devices(3))
            .await
            .unwrap();

        let (device, report) = controller.read_state(2).await.unwrap();
        assert_eq!(device.name, "Unit 2");
        assert_eq!(report.get("power"), Some(&ReportValue::Variant("On")));
        assert_eq!(
            controller.session.calls(),
            [Call::Login, Call::Devices, Call::Read("guid-2".into())]
        );
    }

    #[tokio::test]
    async fn directory_is_fetched_at_most_once_per_invocation() {
        let controller = Controller::connect(MockSession::with_devices(2))
            .await
            .unwrap();

        controller.device_at(1).await.unwrap();
        controller.device_at(2).await.unwrap();
        let fetches = controller
            .session
            .calls()
            .iter()
            .filter(|c| **c == Call::Devices)
            .count();
        assert_eq!(fetches, 1);
    }

    #[tokio::test]
    async fn set_issues_one_write_with_exactly_the_supplied_keys() {
        let controller = Controller::connect(MockSession::with_devices(1))
            .await
            .unwrap();

        let update = DeviceUpdate {
            mode: Some(OperationMode::Cool),
            temperature: Some(22.0),
            ..DeviceUpdate::default()
        };
        let device = controller.write_state(1, &update).await.unwrap();
        assert_eq!(device.name, "Unit 1");
        assert_eq!(
            controller.session.calls(),
            [
                Call::Login,
                Call::Devices,
                Call::Write("guid-1".into(), vec!["temperature", "mode"]),
            ]
        );
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_any_directory_or_write_call() {
        let controller = Controller::connect(MockSession::with_devices(1))
            .await
            .unwrap();

        let err = controller
            .write_state(1, &DeviceUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyUpdate));
        assert_eq!(controller.session.calls(), [Call::Login]);
    }

    #[tokio::test]
    async fn set_out_of_range_never_writes() {
        let controller = Controller::connect(MockSession::with_devices(2))
            .await
            .unwrap();

        let update = DeviceUpdate {
            power: Some(Power::On),
            ..DeviceUpdate::default()
        };
        let err = controller.write_state(5, &update).await.unwrap_err();
        assert!(matches!(err, CoreError::DeviceNotFound { .. }));
        assert!(
            !controller
                .session
                .calls()
                .iter()
                .any(|c| matches!(c, Call::Write(..))),
            "no write may reach the session for an invalid position"
        );
    }

    #[tokio::test]
    async fn session_read_error_surfaces_its_text_and_stops() {
        let session = MockSession {
            read_error: Some("Unauthorized".into()),
            ..MockSession::with_devices(1)
        };
        let controller = Controller::connect(session).await.unwrap();

        let err = controller.read_state(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        // The failing read was the last call issued.
        assert_eq!(
            controller.session.calls().last(),
            Some(&Call::Read("guid-1".into()))
        );
    }

    #[tokio::test]
    async fn dump_reads_raw_data_for_the_resolved_device() {
        let controller = Controller::connect(MockSession::with_devices(2))
            .await
            .unwrap();

        let (device, _report) = controller.dump(2).await.unwrap();
        assert_eq!(device.id.as_str(), "guid-2");
        assert_eq!(
            controller.session.calls().last(),
            Some(&Call::Dump("guid-2".into()))
        );
    }
}

use crate::device_camera::interface::{CameraError, DeviceCamera, LatestFrame};
use std::sync::Arc;

/// Stands in for a machine without a capture device, e.g. an emulator.
pub struct DeviceCameraUnavailable;

impl DeviceCamera for DeviceCameraUnavailable {
    fn start_capturing(
        &self,
        _width: u32,
        _height: u32,
        _sink: Arc<LatestFrame>,
    ) -> Result<(), CameraError> {
        Err(CameraError::NoDevice)
    }

    fn stop_capturing(&self) -> Result<(), CameraError> {
        Ok(())
    }
}

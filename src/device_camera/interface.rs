use crate::frame::Frame;
use crate::library::latest_slot::LatestSlot;
use std::sync::Arc;

pub type LatestFrame = LatestSlot<Frame>;

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("no camera device available")]
    NoDevice,
    #[error("camera is already capturing")]
    AlreadyCapturing,
    #[error("unsupported capture size {width}x{height}")]
    UnsupportedSize { width: u32, height: u32 },
}

/// A capture device that pushes frames into `sink` from its own thread.
pub trait DeviceCamera: Send + Sync {
    fn start_capturing(
        &self,
        width: u32,
        height: u32,
        sink: Arc<LatestFrame>,
    ) -> Result<(), CameraError>;
    fn stop_capturing(&self) -> Result<(), CameraError>;
}

use crate::device_camera::interface::{CameraError, DeviceCamera, LatestFrame};
use crate::frame::Frame;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hands the evaluation loop the newest camera frame, or a static fallback
/// frame when no camera could be started.
pub struct FrameSource {
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    latest: Arc<LatestFrame>,
    fallback: Option<Frame>,
    capturing: AtomicBool,
}

impl FrameSource {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        fallback: Option<Frame>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("frame_source"),
            camera,
            latest: Arc::new(LatestFrame::new()),
            fallback,
            capturing: AtomicBool::new(false),
        }
    }

    pub fn start_capturing(&self, width: u32, height: u32) -> Result<(), CameraError> {
        self.camera
            .start_capturing(width, height, self.latest.clone())?;
        self.capturing.store(true, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Camera capturing at {}x{}", width, height));
        Ok(())
    }

    pub fn stop_capturing(&self) -> Result<(), CameraError> {
        if self.capturing.swap(false, Ordering::SeqCst) {
            self.camera.stop_capturing()?;
            let _ = self.logger.info(&format!(
                "Camera stopped, {} frames replaced before use",
                self.dropped_frames()
            ));
        }
        Ok(())
    }

    /// Never blocks. While capturing, yields each delivered frame at most once.
    /// Without a camera, yields the fallback frame on every call.
    pub fn capture(&self) -> Option<Frame> {
        if self.is_capturing() {
            self.latest.take()
        } else {
            self.fallback.as_ref().map(Frame::recaptured)
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn dropped_frames(&self) -> u64 {
        self.latest.overwritten()
    }
}

pub fn load_fallback_frame(path: &Path) -> Result<Frame, image::ImageError> {
    let image = image::open(path)?;
    Ok(Frame::from_image(&image))
}

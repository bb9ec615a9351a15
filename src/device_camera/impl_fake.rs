use crate::device_camera::interface::{CameraError, DeviceCamera, LatestFrame};
use crate::frame::{Frame, PixelFormat};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Produces noise frames at a fixed rate.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_interval: Duration,
    capturing: Arc<AtomicBool>,
    producer: Mutex<Option<JoinHandle<()>>>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, frame_interval: Duration) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            frame_interval,
            capturing: Arc::new(AtomicBool::new(false)),
            producer: Mutex::new(None),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start_capturing(
        &self,
        width: u32,
        height: u32,
        sink: Arc<LatestFrame>,
    ) -> Result<(), CameraError> {
        let frame_len = match Frame::byte_len(width, height, PixelFormat::Bgra8) {
            Some(len) if len > 0 => len,
            _ => return Err(CameraError::UnsupportedSize { width, height }),
        };
        if self.capturing.swap(true, Ordering::SeqCst) {
            return Err(CameraError::AlreadyCapturing);
        }

        let _ = self
            .logger
            .info(&format!("Capturing {}x{} every {:?}", width, height, self.frame_interval));

        let capturing = self.capturing.clone();
        let frame_interval = self.frame_interval;
        let handle = std::thread::spawn(move || {
            let mut rng = rand::rng();
            while capturing.load(Ordering::SeqCst) {
                let mut pixels = vec![0u8; frame_len];
                rng.fill(&mut pixels[..]);
                sink.put(Frame::new(pixels, width, height, PixelFormat::Bgra8));
                std::thread::sleep(frame_interval);
            }
        });

        if let Ok(mut producer) = self.producer.lock() {
            *producer = Some(handle);
        }

        Ok(())
    }

    fn stop_capturing(&self) -> Result<(), CameraError> {
        if !self.capturing.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        let handle = self.producer.lock().ok().and_then(|mut p| p.take());
        if let Some(handle) = handle {
            let _ = handle.join();
        }

        let _ = self.logger.info("Capture stopped");
        Ok(())
    }
}

impl Drop for DeviceCameraFake {
    fn drop(&mut self) {
        let _ = self.stop_capturing();
    }
}

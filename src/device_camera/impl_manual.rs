use crate::device_camera::interface::{CameraError, DeviceCamera, LatestFrame};
use crate::frame::{Frame, PixelFormat};
use std::sync::{Arc, Mutex};

/// Camera whose frames are pushed by the test itself.
#[derive(Default)]
pub struct DeviceCameraManual {
    sink: Mutex<Option<Arc<LatestFrame>>>,
}

impl DeviceCameraManual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver(&self, frame: Frame) {
        if let Some(sink) = self.sink.lock().unwrap().as_ref() {
            sink.put(frame);
        }
    }

    pub fn deliver_tagged(&self, tag: u8) {
        self.deliver(tagged_frame(tag));
    }

    pub fn is_capturing(&self) -> bool {
        self.sink.lock().unwrap().is_some()
    }
}

/// A 1x1 frame whose single pixel carries `tag`, so tests can tell frames apart.
pub fn tagged_frame(tag: u8) -> Frame {
    Frame::new(vec![tag, tag, tag], 1, 1, PixelFormat::Rgb8)
}

impl DeviceCamera for DeviceCameraManual {
    fn start_capturing(
        &self,
        _width: u32,
        _height: u32,
        sink: Arc<LatestFrame>,
    ) -> Result<(), CameraError> {
        *self.sink.lock().unwrap() = Some(sink);
        Ok(())
    }

    fn stop_capturing(&self) -> Result<(), CameraError> {
        *self.sink.lock().unwrap() = None;
        Ok(())
    }
}

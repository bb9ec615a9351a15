use crate::device_gaze::interface::DeviceGaze;

/// Reports the same hit distance forever, for setups without scene geometry.
pub struct DeviceGazeFixed {
    distance: Option<f32>,
}

impl DeviceGazeFixed {
    pub fn new(distance: Option<f32>) -> Self {
        Self { distance }
    }
}

impl DeviceGaze for DeviceGazeFixed {
    fn hit_distance(&self) -> Option<f32> {
        self.distance
    }
}

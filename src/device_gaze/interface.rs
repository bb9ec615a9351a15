/// Where the user's gaze ray meets the scene.
pub trait DeviceGaze: Send + Sync {
    /// Distance in meters from the head to the first hit, if anything was hit.
    fn hit_distance(&self) -> Option<f32>;
}

use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Window,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Ask the model runtime for the GPU. Also shown in the status text.
    pub use_gpu: bool,
    /// Off behaves like a device without a camera, e.g. an emulator.
    pub camera_enabled: bool,
    pub top_k: usize,
    /// Dominant confidence above this is announced as "is likely".
    pub probability_threshold: f32,
    /// Image evaluated over and over when no camera can be started.
    pub fallback_frame_path: Option<PathBuf>,
    pub capture_width: u32,
    pub capture_height: u32,
    /// Sleep between polls while no new frame has arrived.
    pub idle_poll_interval: Duration,
    /// Pause between evaluations of the fallback frame.
    pub fallback_frame_interval: Duration,
    /// `None` runs the built-in fake classifier.
    pub model: Option<ModelConfig>,
    pub display: DisplayKind,
    pub gaze_distance: Option<f32>,
    pub fake_camera_frame_interval: Duration,
    pub fake_inference_time: Duration,
    pub speech_time_per_word: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_gpu: false,
            camera_enabled: true,
            top_k: 3,
            probability_threshold: 0.6,
            fallback_frame_path: None,
            capture_width: 320,
            capture_height: 240,
            idle_poll_interval: Duration::from_millis(10),
            fallback_frame_interval: Duration::from_millis(500),
            model: None,
            display: DisplayKind::Console,
            gaze_distance: None,
            fake_camera_frame_interval: Duration::from_millis(33),
            fake_inference_time: Duration::from_millis(120),
            speech_time_per_word: Duration::from_millis(300),
            logger_timezone: utc(),
        }
    }
}

impl Config {
    pub fn device_kind(&self) -> &'static str {
        if self.use_gpu {
            "GPU"
        } else {
            "CPU"
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

use crate::config::{Config, DisplayKind};
use crate::image_classifier::models::model_config::ModelConfig;
use clap::Parser;
use std::path::PathBuf;

/// Names what the camera is looking at, on screen and out loud.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Where results and status text are shown.
    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    pub display: DisplayKind,
    /// ONNX classification model. Without one a fake classifier runs.
    #[arg(long)]
    pub model: Option<String>,
    /// Side length of the square network input.
    #[arg(long, default_value_t = 224)]
    pub input_size: u32,
    /// Class names in model output order, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,
    /// Image evaluated over and over when no camera starts.
    #[arg(long)]
    pub fallback_image: Option<PathBuf>,
    /// Behave as if no camera were attached.
    #[arg(long, default_value_t = false)]
    pub no_camera: bool,
    /// Ask the model runtime for the GPU.
    #[arg(long, default_value_t = false)]
    pub gpu: bool,
    #[arg(long)]
    pub top_k: Option<usize>,
    /// Dominant confidence above which a result "is likely".
    #[arg(long)]
    pub probability_threshold: Option<f32>,
    /// Meters to whatever the user is looking at.
    #[arg(long)]
    pub gaze_distance: Option<f32>,
}

impl Args {
    pub fn into_config(self, defaults: Config) -> Config {
        let input_size = self.input_size;
        let labels = self.labels;
        Config {
            display: self.display,
            model: self.model.map(|onnx_model_path| ModelConfig {
                onnx_model_path,
                input_shape: (input_size, input_size),
                labels,
            }),
            fallback_frame_path: self.fallback_image.or(defaults.fallback_frame_path),
            camera_enabled: defaults.camera_enabled && !self.no_camera,
            use_gpu: defaults.use_gpu || self.gpu,
            top_k: self.top_k.unwrap_or(defaults.top_k),
            probability_threshold: self
                .probability_threshold
                .unwrap_or(defaults.probability_threshold),
            gaze_distance: self.gaze_distance.or(defaults.gaze_distance),
            ..defaults
        }
    }
}

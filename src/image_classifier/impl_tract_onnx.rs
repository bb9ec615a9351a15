use crate::frame::Frame;
use crate::image_classifier::interface::{ClassificationResult, ClassifierError, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::top_k::top_k_classifications;
use crate::image_classifier::tract::image::frame_image_to_tensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        use_gpu: bool,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract");
        if use_gpu {
            let _ = logger.info("GPU requested, tract evaluates on the CPU");
        }

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                ClassifierError::Unavailable(format!("{}: {}", config.onnx_model_path, e))
            })?;

        let _ = logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path,
            config.labels.len()
        ));

        Ok(Self { model, config })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, frame: &Frame, top_k: usize) -> Result<ClassificationResult, ClassifierError> {
        let start = Instant::now();

        let image = frame
            .to_rgb_image()
            .ok_or_else(|| ClassifierError::InvalidFrame(format!("{:?}", frame)))?;

        let (height, width) = self.config.input_shape;
        let input = frame_image_to_tensor(&image, width, height);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Evaluation(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Evaluation("model produced no output".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Evaluation(e.to_string()))?;

        let scores: Vec<f32> = output.iter().copied().collect();

        Ok(ClassificationResult {
            classifications: top_k_classifications(&scores, &self.config.labels, top_k),
            elapsed: start.elapsed(),
        })
    }
}

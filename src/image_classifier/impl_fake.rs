use crate::frame::Frame;
use crate::image_classifier::interface::{ClassificationResult, ClassifierError, ImageClassifier};
use crate::image_classifier::top_k::top_k_classifications;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::{Duration, Instant};

const OBJECTS: [&str; 18] = [
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

/// Scores every known object at random after a simulated inference delay.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    labels: Vec<String>,
    inference_time: Duration,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, inference_time: Duration) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            labels: OBJECTS.iter().map(|o| o.to_string()).collect(),
            inference_time,
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, frame: &Frame, top_k: usize) -> Result<ClassificationResult, ClassifierError> {
        if !frame.has_payload() {
            return Err(ClassifierError::InvalidFrame(format!("{:?}", frame)));
        }

        let start = Instant::now();
        std::thread::sleep(self.inference_time);

        let confidence_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| ClassifierError::Evaluation(e.to_string()))?;
        let mut rng = rand::rng();
        let scores: Vec<f32> = self
            .labels
            .iter()
            .map(|_| confidence_dist.sample(&mut rng))
            .collect();

        let classifications = top_k_classifications(&scores, &self.labels, top_k);
        let _ = self.logger.info(&format!(
            "Classified {}x{} frame as {:?}",
            frame.width,
            frame.height,
            classifications.first().map(|c| &c.label)
        ));

        Ok(ClassificationResult {
            classifications,
            elapsed: start.elapsed(),
        })
    }
}

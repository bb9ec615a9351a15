use crate::frame::Frame;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Top-K classifications, highest confidence first.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub classifications: Vec<Classification>,
    pub elapsed: Duration,
}

impl ClassificationResult {
    pub fn dominant(&self) -> Option<&Classification> {
        self.classifications.first()
    }

    pub fn dominant_confidence(&self) -> f32 {
        self.dominant().map(|c| c.confidence).unwrap_or(0.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, frame: &Frame, top_k: usize) -> Result<ClassificationResult, ClassifierError>;
}

/// Deferred model loading, so the app can report progress before the slow part.
pub type ClassifierLoader = Box<
    dyn FnOnce() -> Result<Arc<dyn ImageClassifier + Send + Sync>, ClassifierError> + Send,
>;

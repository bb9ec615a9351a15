use crate::image_classifier::interface::{ClassificationResult, ClassifierError};

/// Outcome of offering one frame to the classifier.
#[derive(Debug)]
pub enum Evaluation {
    Completed(ClassificationResult),
    /// Another evaluation held the guard; the frame was dropped.
    Busy,
    /// The frame carried no usable pixels.
    Unusable,
    Failed(ClassifierError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoopStats {
    pub evaluated: u64,
    pub failed: u64,
    pub dropped_busy: u64,
    pub dropped_unusable: u64,
    pub dropped_replaced: u64,
}

/// Sent from the evaluation thread to the presentation context.
#[derive(Debug)]
pub enum LoopEvent {
    Result(ClassificationResult),
    Stopped(LoopStats),
}

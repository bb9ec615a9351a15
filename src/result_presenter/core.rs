use crate::image_classifier::interface::{Classification, ClassificationResult};

/// The label most recently spoken in this session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnnouncementState {
    last_announced: Option<String>,
}

impl AnnouncementState {
    pub fn last_announced(&self) -> Option<&str> {
        self.last_announced.as_deref()
    }

    /// Both gates must pass: the voice is free and the label is new.
    pub fn should_announce(&self, is_speaking: bool, label: &str) -> bool {
        !is_speaking && self.last_announced() != Some(label)
    }

    pub fn record(&mut self, label: &str) {
        self.last_announced = Some(label.to_string());
    }
}

pub fn likelihood_phrase(confidence: f32, threshold: f32) -> &'static str {
    if confidence > threshold {
        "is likely"
    } else {
        "might be"
    }
}

pub fn distance_phrase(hit_distance: Option<f32>) -> String {
    match hit_distance {
        Some(meters) if meters < 1.0 => {
            format!(" {:.0} centimeter in front of you", meters * 100.0)
        }
        Some(meters) => format!(" {:.1} meter in front of you", meters),
        None => " in front of you".to_string(),
    }
}

pub fn speech_text(dominant: &Classification, threshold: f32, hit_distance: Option<f32>) -> String {
    format!(
        "This {} a {}{}",
        likelihood_phrase(dominant.confidence, threshold),
        dominant.label,
        distance_phrase(hit_distance)
    )
}

pub fn ranking_text(classifications: &[Classification]) -> String {
    classifications
        .iter()
        .map(|c| format!("{} {:.2}", c.label, c.confidence))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_text(result: &ClassificationResult, device_kind: &str) -> String {
    format!(
        "Predominant objects detected in {:>3.0}ms on {}\n {}",
        result.elapsed.as_secs_f64() * 1000.0,
        device_kind,
        ranking_text(&result.classifications)
    )
}

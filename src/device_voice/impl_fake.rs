use crate::device_voice::interface::{DeviceVoice, VoiceError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records what it was asked to say. Speaking state is set by the test.
#[derive(Clone, Default)]
pub struct DeviceVoiceFake {
    speaking: Arc<AtomicBool>,
    declining: Arc<AtomicBool>,
    failing: Arc<AtomicBool>,
    spoken: Arc<Mutex<Vec<String>>>,
}

impl DeviceVoiceFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_speaking(&self, speaking: bool) {
        self.speaking.store(speaking, Ordering::SeqCst);
    }

    pub fn set_declining(&self, declining: bool) {
        self.declining.store(declining, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl DeviceVoice for DeviceVoiceFake {
    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    fn speak(&self, text: &str) -> Result<bool, VoiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(VoiceError::Unavailable("synthesizer offline".to_string()));
        }
        if self.declining.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(true)
    }
}

use crate::device_voice::interface::{DeviceVoice, VoiceError};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Writes utterances to the log and stays busy for roughly as long as saying
/// them out loud would take.
pub struct DeviceVoiceConsole {
    logger: Arc<dyn Logger + Send + Sync>,
    speaking: Arc<AtomicBool>,
    time_per_word: Duration,
}

impl DeviceVoiceConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, time_per_word: Duration) -> Self {
        Self {
            logger: logger.with_namespace("voice").with_namespace("console"),
            speaking: Arc::new(AtomicBool::new(false)),
            time_per_word,
        }
    }
}

impl DeviceVoice for DeviceVoiceConsole {
    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    fn speak(&self, text: &str) -> Result<bool, VoiceError> {
        if self.speaking.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }

        let _ = self.logger.info(&format!("\"{}\"", text));

        let speaking = self.speaking.clone();
        let duration = self.time_per_word * text.split_whitespace().count() as u32;
        let spawned = std::thread::Builder::new()
            .name("voice".to_string())
            .spawn(move || {
                std::thread::sleep(duration);
                speaking.store(false, Ordering::SeqCst);
            });

        if let Err(e) = spawned {
            self.speaking.store(false, Ordering::SeqCst);
            return Err(VoiceError::Unavailable(e.to_string()));
        }

        Ok(true)
    }
}

use crate::config::Config;
use crate::device_display::interface::{DeviceDisplay, DisplayError};
use crate::device_gaze::interface::DeviceGaze;
use crate::device_voice::interface::DeviceVoice;
use crate::image_classifier::interface::ClassificationResult;
use crate::library::logger::interface::Logger;
use crate::result_presenter::core::{display_text, speech_text, AnnouncementState};
use std::sync::{Arc, Mutex};

/// Shows every result and speaks the ones worth speaking.
///
/// Lives on the presentation thread; the display and voice are only touched
/// from here.
pub struct ResultPresenter {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    device_voice: Arc<dyn DeviceVoice + Send + Sync>,
    device_gaze: Arc<dyn DeviceGaze + Send + Sync>,
    announcement: AnnouncementState,
}

impl ResultPresenter {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_voice: Arc<dyn DeviceVoice + Send + Sync>,
        device_gaze: Arc<dyn DeviceGaze + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("presenter"),
            device_display,
            device_voice,
            device_gaze,
            announcement: AnnouncementState::default(),
        }
    }

    #[allow(dead_code)]
    pub fn announcement(&self) -> &AnnouncementState {
        &self.announcement
    }

    pub fn show_status(&self, text: &str) -> Result<(), DisplayError> {
        let _ = self.logger.info(&format!("Status: {}", text));
        self.write(text)
    }

    pub fn clear(&self) -> Result<(), DisplayError> {
        self.device_display
            .lock()
            .map_err(|e| DisplayError::Closed(e.to_string()))?
            .clear()
    }

    /// Returns whether an announcement was started.
    pub fn present(&mut self, result: &ClassificationResult) -> Result<bool, DisplayError> {
        self.write(&display_text(result, self.config.device_kind()))?;

        let Some(dominant) = result.dominant() else {
            return Ok(false);
        };

        if !self
            .announcement
            .should_announce(self.device_voice.is_speaking(), &dominant.label)
        {
            return Ok(false);
        }

        let text = speech_text(
            dominant,
            self.config.probability_threshold,
            self.device_gaze.hit_distance(),
        );

        match self.device_voice.speak(&text) {
            Ok(true) => {
                self.announcement.record(&dominant.label);
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(e) => {
                let _ = self.logger.error(&format!("Could not speak \"{}\": {}", text, e));
                Ok(false)
            }
        }
    }

    fn write(&self, text: &str) -> Result<(), DisplayError> {
        let mut device_display = self
            .device_display
            .lock()
            .map_err(|e| DisplayError::Closed(e.to_string()))?;
        device_display.write_text(text)
    }
}

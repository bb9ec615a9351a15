use crate::device_display::interface::{DeviceDisplay, DisplayError};
use std::sync::{Arc, Mutex};

/// Remembers every text written, newest last.
#[derive(Clone, Default)]
pub struct DeviceDisplayMemory {
    history: Arc<Mutex<Vec<String>>>,
}

impl DeviceDisplayMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl DeviceDisplay for DeviceDisplayMemory {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.history.lock().unwrap().push(String::new());
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.history.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

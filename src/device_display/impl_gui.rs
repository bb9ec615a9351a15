use crate::device_display::interface::{DeviceDisplay, DisplayError};
use eframe::egui;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct StatusWindow {
    text: Arc<Mutex<String>>,
}

impl eframe::App for StatusWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let text = match self.text.lock() {
            Ok(text) => text.clone(),
            Err(_) => return,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                for line in text.lines() {
                    ui.label(
                        egui::RichText::new(line)
                            .monospace()
                            .color(egui::Color32::WHITE)
                            .size(18.0),
                    );
                }
            });
        });

        // Text changes come from other threads, so keep polling.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    text: Arc<Mutex<String>>,
    initialized: bool,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(String::new())),
            initialized: false,
        }
    }

    fn set_text(&self, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let mut current = self
            .text
            .lock()
            .map_err(|e| DisplayError::Closed(e.to_string()))?;
        *current = text.to_string();
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), DisplayError> {
        let text = self.text.clone();

        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([520.0, 240.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = StatusWindow { text };

            let _ = eframe::run_native("HoloVision", options, Box::new(|_cc| Box::new(window)));
        });

        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.set_text("")
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.set_text(text)
    }
}

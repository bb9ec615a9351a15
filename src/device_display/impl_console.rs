use crate::device_display::interface::{DeviceDisplay, DisplayError};

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn render_display(&self) {
        let width = self.chars_per_line();
        println!("┌{}┐", "─".repeat(width));
        for line in &self.lines {
            let visible: String = line.chars().take(width).collect();
            println!("│{:<width$}│", visible, width = width);
        }
        println!("└{}┘", "─".repeat(width));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lines.clear();
        self.render_display();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.lines = text.lines().map(|l| l.to_string()).collect();
        self.render_display();
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("display is not initialized")]
    NotInitialized,
    #[error("display surface is gone: {0}")]
    Closed(String),
}

/// A text block anchored in front of the user.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Remove all text from the block
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Replace the whole block with `text`; newlines start new lines
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Widest line the surface shows before truncating
    fn chars_per_line(&self) -> usize {
        48
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("speech synthesizer unavailable: {0}")]
    Unavailable(String),
}

pub trait DeviceVoice: Send + Sync {
    fn is_speaking(&self) -> bool;

    /// Starts speaking `text`. `Ok(false)` means the synthesizer declined,
    /// e.g. because it was still busy.
    fn speak(&self, text: &str) -> Result<bool, VoiceError>;
}

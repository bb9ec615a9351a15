pub mod latest_slot;
pub mod logger;
pub mod processing_guard;

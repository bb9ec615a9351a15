pub mod event;
pub mod main;

pub mod drag;
pub mod progress;

pub mod app;
pub mod geometry;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;

pub mod config_io;
pub mod data;
pub mod lock;
pub mod paths;
pub mod watcher;

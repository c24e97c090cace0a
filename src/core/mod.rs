mod container;
mod log;

pub use container::Container;
pub use log::{log, LogLevel};

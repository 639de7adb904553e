pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;

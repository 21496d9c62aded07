pub mod config;
pub mod types;

pub use config::{AppConfig, YouTubeSource};
pub use types::*;

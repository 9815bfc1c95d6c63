// src/config/mod.rs

pub mod app_config;

// Re-export main types for convenience
pub use app_config::{AppConfig, OutputConfig, OutputFormat};

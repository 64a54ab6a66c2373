// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod renderer;

pub use config::ApiConfig;
pub use http::HttpNoteBackend;

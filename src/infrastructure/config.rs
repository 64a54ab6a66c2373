// src/infrastructure/config.rs
use crate::constants::{DEFAULT_API_URL, NOTES_PATH};
use crate::domain::DomainError;
use std::path::Path;
use url::Url;

/// Load `KEY=value` pairs into the process environment.
///
/// Without a path, `.env` is searched from the working directory upwards.
/// Returns `false` when there is no such file; a file that exists but cannot
/// be parsed is an error.
pub fn load_env_file(path: Option<&Path>) -> Result<bool, DomainError> {
    let result = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(DomainError::Config(format!("Failed to load .env file: {}", e))),
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a backend origin such as `http://localhost:8080` or
    /// `https://example.com/guestbook/`.
    ///
    /// The stored base always ends in `/` so that endpoint paths are
    /// appended to it instead of replacing its last segment.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut base_url = Url::parse(raw.trim())
            .map_err(|e| DomainError::Config(format!("Invalid API URL '{}': {}", raw, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::Config(format!(
                "API URL must use http or https: {}",
                raw
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "API URL cannot be used as a base: {}",
                raw
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self { base_url })
    }

    /// Use the override when given, otherwise the local default.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, DomainError> {
        match override_url {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Self::parse(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint used for both listing and creating notes.
    pub fn notes_url(&self) -> Url {
        // joining a relative path onto an http(s) base cannot fail
        self.base_url
            .join(NOTES_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_API_URL).expect("default API URL is valid")
    }
}

// src/infrastructure/http.rs
use crate::application::NoteBackend;
use crate::domain::{DomainError, NewNote, Note};
use crate::infrastructure::ApiConfig;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// [`NoteBackend`] speaking JSON over HTTP to `GET`/`POST /api/notes`.
///
/// No timeout, retry or cancellation: each call waits for the backend.
pub struct HttpNoteBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpNoteBackend {
    pub fn new(config: ApiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(concat!("wavenote/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!(base_url = %config.base_url(), "Using notes backend");
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing client, e.g. one with custom TLS settings.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Turn a non-2xx response into [`DomainError::Status`], keeping the body
    /// for the logs.
    fn ensure_success(response: Response) -> Result<Response, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DomainError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_decode() {
        DomainError::Decode(e.to_string())
    } else {
        DomainError::Transport(e.to_string())
    }
}

impl NoteBackend for HttpNoteBackend {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.config.notes_url())
            .send()
            .map_err(transport_error)?;

        let body = Self::ensure_success(response)?
            .text()
            .map_err(transport_error)?;

        let notes: Vec<Note> =
            serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, note), fields(nickname = note.nickname))]
    fn create_note(&mut self, note: &NewNote<'_>) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.config.notes_url())
            .json(note)
            .send()
            .map_err(transport_error)?;

        let status = Self::ensure_success(response)?.status();

        debug!(status = status.as_u16(), "Note accepted");
        Ok(())
    }
}

// src/constants.rs
//
// Application-wide constants shared by the configuration layer, the HTTP
// backend and the presenters.

/// Environment variable that overrides the backend origin.
///
/// Read by clap (`--api-url` falls back to it) after `.env` has been loaded.
pub const API_URL_ENV: &str = "WAVENOTE_API_URL";

/// Backend origin used when neither `--api-url` nor `WAVENOTE_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path of the notes collection, relative to the backend origin.
///
/// Both the list (`GET`) and the create (`POST`) calls target it.
pub const NOTES_PATH: &str = "api/notes";

/// Message shown to the user when a note could not be created.
pub const SUBMIT_FAILURE_ALERT: &str = "Failed to send! Check the backend connection.";

/// Maximum number of characters of a note shown per line in `wavenote list`.
pub const LIST_CONTENT_WIDTH: usize = 72;

/// Prefix of the temporary HTML file written by `wavenote view`.
pub const PAGE_FILE_PREFIX: &str = "wavenote-";

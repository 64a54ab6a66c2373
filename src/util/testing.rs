// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteBackend, Notifier};
use crate::domain::{DomainError, NewNote, Note};

/// In-memory backend for testing the guestbook client without HTTP.
///
/// Behaves like a real backend: created notes get the next free id and show
/// up in later listings. Failures can be switched on per operation.
///
/// # Examples
///
/// ```
/// use wavenote::util::testing::MockNoteBackend;
/// use wavenote::domain::{Emoji, Note};
///
/// let mock = MockNoteBackend::builder()
///     .with_note(Note {
///         id: 1,
///         nickname: "Alice".to_string(),
///         content: "Hello".to_string(),
///         emoji: Emoji::Rocket,
///     })
///     .with_create_failure()
///     .build();
/// assert_eq!(mock.list_calls(), 0);
/// ```
pub struct MockNoteBackend {
    notes: Vec<Note>,
    created: Vec<Note>,
    list_calls: usize,
    list_fails_after: Option<usize>,
    create_failures: Option<usize>,
}

impl MockNoteBackend {
    pub fn builder() -> MockNoteBackendBuilder {
        MockNoteBackendBuilder::new()
    }

    /// Number of `list_notes` calls so far, failed ones included.
    pub fn list_calls(&self) -> usize {
        self.list_calls
    }

    /// Notes accepted by `create_note`, in submission order.
    pub fn created(&self) -> &[Note] {
        &self.created
    }

    fn next_id(&self) -> i64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }
}

impl NoteBackend for MockNoteBackend {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.list_calls += 1;
        match self.list_fails_after {
            Some(ok_calls) if self.list_calls > ok_calls => {
                Err(DomainError::Transport("connection refused".to_string()))
            }
            _ => Ok(self.notes.clone()),
        }
    }

    fn create_note(&mut self, note: &NewNote<'_>) -> Result<(), DomainError> {
        if let Some(remaining) = self.create_failures.filter(|&n| n > 0) {
            // usize::MAX never counts down
            if remaining != usize::MAX {
                self.create_failures = Some(remaining - 1);
            }
            return Err(DomainError::Status {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let stored = Note {
            id: self.next_id(),
            nickname: note.nickname.to_string(),
            content: note.content.to_string(),
            emoji: note.emoji,
        };
        self.notes.push(stored.clone());
        self.created.push(stored);
        Ok(())
    }
}

/// Builder for MockNoteBackend
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteBackendBuilder {
    notes: Vec<Note>,
    list_fails_after: Option<usize>,
    create_failures: Option<usize>,
}

impl MockNoteBackendBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_fails_after: None,
            create_failures: None,
        }
    }

    /// Add a note that is returned by list_notes
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every list_notes call fail
    pub fn with_list_failure(self) -> Self {
        self.with_list_failure_after(0)
    }

    /// Let the first `ok_calls` list_notes calls succeed, fail all later ones
    pub fn with_list_failure_after(mut self, ok_calls: usize) -> Self {
        self.list_fails_after = Some(ok_calls);
        self
    }

    /// Make every create_note call fail
    pub fn with_create_failure(mut self) -> Self {
        self.create_failures = Some(usize::MAX);
        self
    }

    /// Fail the next `count` create_note calls, then accept
    pub fn with_create_failures(mut self, count: usize) -> Self {
        self.create_failures = Some(count);
        self
    }

    pub fn build(self) -> MockNoteBackend {
        MockNoteBackend {
            notes: self.notes,
            created: vec![],
            list_calls: 0,
            list_fails_after: self.list_fails_after,
            create_failures: self.create_failures,
        }
    }
}

impl Default for MockNoteBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that remembers every alert instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio", "axum"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

// src/application/guestbook.rs
use crate::constants::SUBMIT_FAILURE_ALERT;
use crate::domain::{DomainError, FormDraft, NewNote, Note, NoteList};
use tracing::{debug, info, instrument, warn};

/// Anything that can list and store notes.
pub trait NoteBackend {
    /// Fetch every note, in whatever order the backend keeps them.
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Store a new note. Any response body is ignored.
    fn create_note(&mut self, note: &NewNote<'_>) -> Result<(), DomainError>;
}

/// Blocking, user-facing notification.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many notes.
    Refreshed(usize),
    /// The fetch failed and the previous list is still on display.
    Kept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nickname or content was empty; nothing was sent.
    Skipped,
    /// The note was stored, the draft cleared and the list reloaded.
    Posted,
    /// The backend call failed and the user was alerted.
    Failed,
}

/// The guestbook client: owns the displayed notes and mediates both backend
/// calls.
pub struct Guestbook<B: NoteBackend, N: Notifier> {
    backend: B,
    notifier: N,
    notes: NoteList,
}

impl<B: NoteBackend, N: Notifier> Guestbook<B, N> {
    /// Create a client with an empty list and no backend traffic yet.
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend,
            notifier,
            notes: NoteList::new(),
        }
    }

    /// Create a client and perform the initial load.
    pub fn mount(backend: B, notifier: N) -> Self {
        let mut guestbook = Self::new(backend, notifier);
        guestbook.load_notes();
        guestbook
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Replace the displayed notes with a fresh fetch.
    ///
    /// Read failures are logged and otherwise swallowed: the previous list
    /// stays as it was.
    #[instrument(level = "debug", skip(self))]
    pub fn load_notes(&mut self) -> LoadOutcome {
        match self.backend.list_notes() {
            Ok(notes) => {
                let count = notes.len();
                self.notes.replace(notes);
                debug!(count, "Loaded notes");
                LoadOutcome::Refreshed(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load notes, keeping current list");
                LoadOutcome::Kept
            }
        }
    }

    /// Send the draft to the backend.
    ///
    /// On success the draft's content is cleared and the list reloaded. On
    /// failure the user is alerted and the draft is left untouched so the
    /// same text can be sent again.
    #[instrument(level = "debug", skip(self, draft), fields(nickname = %draft.nickname, emoji = %draft.emoji))]
    pub fn submit_note(&mut self, draft: &mut FormDraft) -> SubmitOutcome {
        if !draft.is_submittable() {
            debug!("Draft incomplete, not submitting");
            return SubmitOutcome::Skipped;
        }

        match self.backend.create_note(&draft.as_new_note()) {
            Ok(()) => {
                info!("Note posted");
                draft.clear_content();
                self.load_notes();
                SubmitOutcome::Posted
            }
            Err(e) => {
                warn!(error = %e, "Failed to post note");
                self.notifier.alert(SUBMIT_FAILURE_ALERT);
                SubmitOutcome::Failed
            }
        }
    }
}

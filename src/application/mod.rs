// src/application/mod.rs
pub mod guestbook;

pub use guestbook::{Guestbook, LoadOutcome, NoteBackend, Notifier, SubmitOutcome};

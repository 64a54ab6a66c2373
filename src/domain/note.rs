// src/domain/note.rs
use crate::domain::Emoji;
use serde::{Deserialize, Serialize};

/// A guestbook entry as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub nickname: String,
    pub content: String,
    #[serde(default)]
    pub emoji: Emoji,
}

/// Body of `POST /api/notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewNote<'a> {
    pub nickname: &'a str,
    pub content: &'a str,
    pub emoji: Emoji,
}

/// The notes currently on display, newest first.
///
/// Only ever replaced wholesale by [`NoteList::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched sequence, ordered by descending id.
    pub fn replace(&mut self, mut notes: Vec<Note>) {
        notes.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        self.notes = notes;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl From<Vec<Note>> for NoteList {
    fn from(notes: Vec<Note>) -> Self {
        let mut list = NoteList::new();
        list.replace(notes);
        list
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

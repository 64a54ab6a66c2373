// src/ports/terminal.rs
use crate::application::Notifier;
use crate::constants::LIST_CONTENT_WIDTH;
use crate::domain::{Note, NoteList};
use crate::util::text::single_line;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Plain-text and JSON views of the guestbook.
#[derive(Debug)]
pub struct TerminalPresenter {
    width: usize,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            width: LIST_CONTENT_WIDTH,
        }
    }

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "#{} {} {} (by {})",
            note.id,
            note.emoji,
            single_line(&note.content, self.width),
            single_line(&note.nickname, self.width),
        )
    }

    /// One line per note, newest first.
    pub fn render_list(&self, notes: &NoteList) -> String {
        if notes.is_empty() {
            return "No notes yet.\n".to_string();
        }
        notes
            .iter()
            .map(|note| self.render_note(note) + "\n")
            .collect()
    }

    /// Confirmation after a successful post, then the list. The confirmation
    /// stands on its own when the reload failed and the list is stale.
    pub fn render_posted(&self, notes: &NoteList) -> String {
        format!("Note posted.\n{}", self.render_list(notes))
    }

    pub fn render_json(&self, notes: &NoteList) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes")
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows alerts on a terminal stream, stderr by default.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl TerminalNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn alert(&mut self, message: &str) {
        // nowhere left to report a broken terminal
        let _ = writeln!(self.out, "⚠ {message}").and_then(|_| self.out.flush());
    }
}

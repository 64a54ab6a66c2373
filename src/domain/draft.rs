// src/domain/draft.rs
use crate::domain::{Emoji, NewNote};

/// The not-yet-submitted form state.
///
/// Lives as long as the client session; fields are edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub nickname: String,
    pub content: String,
    pub emoji: Emoji,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft with author fields filled in and an empty message.
    pub fn with_author(nickname: impl Into<String>, emoji: Emoji) -> Self {
        Self {
            nickname: nickname.into(),
            content: String::new(),
            emoji,
        }
    }

    /// Both nickname and content must be present before anything is sent.
    pub fn is_submittable(&self) -> bool {
        !self.nickname.is_empty() && !self.content.is_empty()
    }

    pub fn as_new_note(&self) -> NewNote<'_> {
        NewNote {
            nickname: &self.nickname,
            content: &self.content,
            emoji: self.emoji,
        }
    }

    /// Reset after a successful post; nickname and emoji stay for the next one.
    pub fn clear_content(&mut self) {
        self.content.clear();
    }
}

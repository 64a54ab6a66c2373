// src/domain/mod.rs
pub mod draft;
pub mod emoji;
pub mod error;
pub mod note;

pub use draft::FormDraft;
pub use emoji::Emoji;
pub use error::DomainError;
pub use note::{NewNote, Note, NoteList};

// src/domain/emoji.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of glyphs a note can carry.
///
/// On the wire an emoji is the glyph itself (`"🚀"`), never the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Emoji {
    #[default]
    #[serde(rename = "🌊")]
    Wave,
    #[serde(rename = "🔥")]
    Fire,
    #[serde(rename = "🚀")]
    Rocket,
    #[serde(rename = "💖")]
    Heart,
    #[serde(rename = "🍀")]
    Clover,
}

impl Emoji {
    /// All emojis in the order the picker offers them.
    pub const ALL: [Emoji; 5] = [
        Emoji::Wave,
        Emoji::Fire,
        Emoji::Rocket,
        Emoji::Heart,
        Emoji::Clover,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Emoji::Wave => "🌊",
            Emoji::Fire => "🔥",
            Emoji::Rocket => "🚀",
            Emoji::Heart => "💖",
            Emoji::Clover => "🍀",
        }
    }

    /// ASCII alias accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Emoji::Wave => "wave",
            Emoji::Fire => "fire",
            Emoji::Rocket => "rocket",
            Emoji::Heart => "heart",
            Emoji::Clover => "clover",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Emoji {
    type Err = DomainError;

    /// Accepts either the glyph or its name, ignoring case and a trailing
    /// variation selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('\u{FE0F}');
        Emoji::ALL
            .into_iter()
            .find(|emoji| {
                emoji.glyph() == trimmed || emoji.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| DomainError::InvalidEmoji(s.to_string()))
    }
}

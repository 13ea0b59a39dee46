//! Decoder configuration types
//!
//! The decoder needs very little configuration: which language the replay is
//! written in, or none to detect it from the event texts.

use crate::locale::Language;
use serde::{Deserialize, Serialize};

/// Configuration for a decoding session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Language of the replay texts; `None` detects it from the events
    #[serde(default)]
    pub language: Option<Language>,

    /// Language used when detection finds no known phrase
    #[serde(default)]
    pub fallback_language: Language,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: force the replay language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Builder method: set the language used when detection fails
    pub fn with_fallback_language(mut self, language: Language) -> Self {
        self.fallback_language = language;
        self
    }

    /// True if the language has to be detected from the replay
    pub fn detects_language(&self) -> bool {
        self.language.is_none()
    }
}

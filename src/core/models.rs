//! Core data models for the translation filter

use serde::{Deserialize, Serialize};

/// Wire-format request sent to the DeepLX endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Outcome of running a message through the translation pipeline.
///
/// `Failed` carries the untranslated original so callers can keep the
/// message content byte-for-byte intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Pipeline completed; the text is ready to replace message content
    Translated(String),
    /// Translation did not complete; original text must be preserved
    Failed {
        original: String,
        reason: String,
    },
}

impl TranslationOutcome {
    /// Whether the pipeline produced a usable translation
    pub fn is_translated(&self) -> bool {
        matches!(self, TranslationOutcome::Translated(_))
    }

    /// Legacy fallback rendering: original text plus a grep-able failure tag.
    /// Used for diagnostics only, never written into message content.
    pub fn annotated(&self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text.clone(),
            TranslationOutcome::Failed { original, reason } => {
                format!("{}\n\n[translation failed: {}]", original, reason)
            }
        }
    }
}

/// A single chat message. Fields beyond role/content are carried through
/// untouched so the hook returns the body unchanged in shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// The full request/response body exchanged with the hosting pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBody {
    /// A body without a `messages` key deserializes to an empty list and
    /// serializes back without the key, so the wire shape is preserved.
    /// An explicit `"messages": []` collapses the same way.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChatBody {
    /// Find the last message with the given role, scanning from the end
    pub fn last_message_mut(&mut self, role: &str) -> Option<&mut Message> {
        self.messages.iter_mut().rev().find(|m| m.role == role)
    }

    /// Read-only variant of [`last_message_mut`](Self::last_message_mut)
    pub fn last_message(&self, role: &str) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == role)
    }
}

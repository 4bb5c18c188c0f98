//! Inlet/outlet hooks over the chat message exchange
//!
//! The hosting pipeline calls `inlet` before model inference with the
//! outgoing request body, and `outlet` afterwards with the response body.
//! Each hook translates at most one message, in place, and never fails the
//! exchange: a translation problem leaves the message exactly as it was.

use tracing::{debug, warn};

use crate::core::client::DeepLxClient;
use crate::core::config::FilterConfig;
use crate::core::errors::Result;
use crate::core::models::{ChatBody, TranslationOutcome};
use crate::processors::codeblock::CodeBlockMasker;
use crate::processors::table::TableSplitter;

/// Role string used by user-authored messages
const ROLE_USER: &str = "user";
/// Role string used by assistant-authored messages
const ROLE_ASSISTANT: &str = "assistant";

/// Translates the most recent user/assistant message in a chat body
#[derive(Debug, Clone)]
pub struct MessageTranslator {
    client: DeepLxClient,
    config: FilterConfig,
    masker: CodeBlockMasker,
    splitter: TableSplitter,
}

impl MessageTranslator {
    pub fn new(config: FilterConfig) -> Result<Self> {
        let client = DeepLxClient::new(&config)?;
        Ok(Self {
            client,
            config,
            masker: CodeBlockMasker::new(),
            splitter: TableSplitter::new(),
        })
    }

    /// Create from environment configuration
    pub fn from_env() -> Result<Self> {
        let config = FilterConfig::load()?;
        Self::new(config)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Pre-inference hook: translate the last user message in place
    pub async fn inlet(&self, body: &mut ChatBody) {
        if !self.config.user_direction_active() {
            debug!("inlet: user direction inactive, skipping");
            return;
        }

        self.apply(body, ROLE_USER, &self.config.source_user, &self.config.target_user)
            .await;
    }

    /// Post-inference hook: translate the last assistant message in place
    pub async fn outlet(&self, body: &mut ChatBody) {
        if !self.config.assistant_direction_active() {
            debug!("outlet: assistant direction inactive, skipping");
            return;
        }

        self.apply(
            body,
            ROLE_ASSISTANT,
            &self.config.source_assistant,
            &self.config.target_assistant,
        )
        .await;
    }

    /// Run the pipeline against the last message of `role`, committing the
    /// result only on success.
    async fn apply(&self, body: &mut ChatBody, role: &str, source: &str, target: &str) {
        let Some(content) = body.last_message(role).map(|m| m.content.clone()) else {
            debug!("No {} message to translate", role);
            return;
        };

        match self.translate_text(&content, source, target).await {
            TranslationOutcome::Translated(translated) => {
                if let Some(message) = body.last_message_mut(role) {
                    message.content = translated;
                }
            }
            outcome @ TranslationOutcome::Failed { .. } => {
                warn!(
                    "Translation {} -> {} failed, keeping original {} message: {}",
                    source,
                    target,
                    role,
                    outcome.annotated()
                );
            }
        }
    }

    /// Full text pipeline: mask code, split off the table, translate the
    /// prose prefix, reattach the table, repair delimiters, restore code.
    pub async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslationOutcome {
        let (masked, stash) = self.masker.extract(text);
        let (prefix, table) = self.splitter.split(&masked);

        let translated_prefix = match self.client.translate(prefix, source, target).await {
            Ok(translated) => translated,
            Err(e) => {
                return TranslationOutcome::Failed {
                    original: text.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        let reassembled = format!("{}{}", translated_prefix, table);
        let normalized = self.splitter.normalize(&reassembled);
        let restored = self.masker.restore(&normalized, stash);

        TranslationOutcome::Translated(restored)
    }
}

//! DeepLX Filter - chat pipeline translation middleware
//!
//! This library intercepts user and assistant messages in a chat exchange,
//! translates them through a DeepLX-compatible API, and preserves fenced
//! code blocks and Markdown tables across the translation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod filter;
pub mod processors;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::DeepLxClient,
    config::FilterConfig,
    errors::TranslationError,
    models::{ChatBody, Message, TranslationOutcome, TranslationRequest},
};

pub use filter::MessageTranslator;
pub use processors::{codeblock::CodeBlockMasker, table::TableSplitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

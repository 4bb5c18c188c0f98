//! Fenced code block masking
//!
//! Translation APIs reflow whatever they are given, so fenced code regions
//! are lifted out before the call and spliced back in afterwards.

use regex::Regex;

/// Placeholder substituted for each fenced region in the masked text
pub const PLACEHOLDER: &str = "__CODE_BLOCK__";

/// Ordered stash of extracted code block bodies.
///
/// Returned by value from [`CodeBlockMasker::extract`] and consumed in the
/// same order by [`CodeBlockMasker::restore`], so there is no state shared
/// across calls. Invariant at extraction time: the masked text contains
/// exactly `len()` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlockStash(Vec<String>);

impl CodeBlockStash {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts and restores triple-backtick fenced regions
#[derive(Debug, Clone)]
pub struct CodeBlockMasker {
    fence_re: Regex,
}

impl Default for CodeBlockMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBlockMasker {
    pub fn new() -> Self {
        // Non-greedy, dot matches newlines: each fence pair is matched
        // left to right, never across a closing fence.
        let fence_re = Regex::new(r"(?s)```(.*?)```").expect("static regex");
        Self { fence_re }
    }

    /// Replace each fenced region with a placeholder, collecting the inner
    /// content in match order.
    pub fn extract(&self, text: &str) -> (String, CodeBlockStash) {
        let mut stash = Vec::new();
        let masked = self
            .fence_re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                stash.push(caps[1].to_string());
                PLACEHOLDER
            })
            .into_owned();

        (masked, CodeBlockStash(stash))
    }

    /// Substitute stashed content back, one placeholder at a time in order.
    ///
    /// If the translated text lost a placeholder, the surplus stash entry is
    /// dropped; if it gained one, the extra placeholder is left verbatim.
    /// Misalignment is a known risk of placeholder masking and is not
    /// repaired here.
    pub fn restore(&self, masked: &str, stash: CodeBlockStash) -> String {
        let mut text = masked.to_string();
        for code in stash.0 {
            text = text.replacen(PLACEHOLDER, &format!("```{}```", code), 1);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_single_block() {
        let masker = CodeBlockMasker::new();
        let input = "Hello ```print(1)``` world";

        let (masked, stash) = masker.extract(input);
        assert_eq!(masked, format!("Hello {} world", PLACEHOLDER));
        assert_eq!(stash.len(), 1);

        assert_eq!(masker.restore(&masked, stash), input);
    }

    #[test]
    fn test_round_trip_multiple_blocks_in_order() {
        let masker = CodeBlockMasker::new();
        let input = "a ```one``` b ```two``` c";

        let (masked, stash) = masker.extract(input);
        assert_eq!(stash.len(), 2);
        assert_eq!(masked.matches(PLACEHOLDER).count(), 2);

        assert_eq!(masker.restore(&masked, stash), input);
    }

    #[test]
    fn test_multiline_block() {
        let masker = CodeBlockMasker::new();
        let input = "before\n```rust\nfn main() {}\n```\nafter";

        let (masked, stash) = masker.extract(input);
        assert_eq!(stash.len(), 1);
        assert!(!masked.contains("fn main"));

        assert_eq!(masker.restore(&masked, stash), input);
    }

    #[test]
    fn test_no_blocks_is_identity() {
        let masker = CodeBlockMasker::new();
        let input = "plain text, no fences";

        let (masked, stash) = masker.extract(input);
        assert_eq!(masked, input);
        assert!(stash.is_empty());
        assert_eq!(masker.restore(&masked, stash), input);
    }

    #[test]
    fn test_unterminated_fence_left_alone() {
        let masker = CodeBlockMasker::new();
        let input = "open ```but never closed";

        let (masked, stash) = masker.extract(input);
        assert_eq!(masked, input);
        assert!(stash.is_empty());
    }

    #[test]
    fn test_stash_exhausted_leaves_placeholder() {
        let masker = CodeBlockMasker::new();
        let (masked, _) = masker.extract("x ```a``` y");

        // Translation "removed" the stash pairing: restore with an empty one
        let restored = masker.restore(&masked, CodeBlockStash::default());
        assert!(restored.contains(PLACEHOLDER));
    }
}

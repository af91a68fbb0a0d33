//! Message normalization
//!
//! Every downstream matcher works on the trimmed, lower-cased form; the
//! original casing is kept for proper-noun extraction (place names, the
//! user's name) where capitalization carries signal.

/// A chat message in both forms needed by the matchers.
#[derive(Debug, Clone)]
pub struct NormalizedMessage {
    /// Raw text, trimmed but with original casing
    pub original: String,
    /// Trimmed, lower-cased text
    pub normalized: String,
}

impl NormalizedMessage {
    pub fn new(raw: &str) -> Self {
        let original = raw.trim().to_string();
        let normalized = original.to_lowercase();
        Self {
            original,
            normalized,
        }
    }

    /// Whole-message form used for the exact-phrase greeting table:
    /// trailing question marks, exclamation points and periods are ignored.
    pub fn phrase_key(&self) -> &str {
        self.normalized
            .trim_end_matches(['?', '!', '.'])
            .trim_end()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let msg = NormalizedMessage::new("  Show me Villas in Miami  ");
        assert_eq!(msg.original, "Show me Villas in Miami");
        assert_eq!(msg.normalized, "show me villas in miami");
    }

    #[test]
    fn phrase_key_ignores_trailing_punctuation() {
        let msg = NormalizedMessage::new("How are you?");
        assert_eq!(msg.phrase_key(), "how are you");

        let msg = NormalizedMessage::new("hi!!");
        assert_eq!(msg.phrase_key(), "hi");
    }

    #[test]
    fn empty_input_detected() {
        assert!(NormalizedMessage::new("   ").is_empty());
    }
}

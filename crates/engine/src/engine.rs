//! Chat engine
//!
//! Orchestrates one request: normalize, run the conversational classifier,
//! extract entities, short-circuit unparseable text, run the filter
//! pipeline, compose the reply. Stateless and side-effect free per request;
//! the catalog snapshot is obtained by the caller before this runs.

use propbot_config::{ReplyTable, PREDEFINED_SUGGESTIONS};
use propbot_core::{ChatResponse, EngineError, Listing};
use propbot_nlu::{classify, is_unparseable, FilterExtractor, NormalizedMessage};

use crate::compose;
use crate::pipeline;

/// The query-understanding and filtering engine.
pub struct ChatEngine {
    extractor: FilterExtractor,
    replies: ReplyTable,
}

impl ChatEngine {
    pub fn new(replies: ReplyTable) -> Self {
        Self {
            extractor: FilterExtractor::new(),
            replies,
        }
    }

    /// Handle one free-form chat message against a catalog snapshot.
    pub fn handle_message(
        &self,
        raw: &str,
        catalog: &[Listing],
    ) -> Result<ChatResponse, EngineError> {
        let msg = NormalizedMessage::new(raw);
        if msg.is_empty() {
            return Err(EngineError::EmptyQuery);
        }

        // Conversational turns are fully determined by the classifier; no
        // filtering happens for them.
        if let Some(classified) = classify(&self.replies, &msg) {
            tracing::debug!(intent = ?classified.intent, "conversational turn");
            return Ok(ChatResponse::reply_only(classified.reply));
        }

        // A message that is nothing but a large number is ambiguous between
        // price, size and bedrooms; ask instead of guessing.
        if let Some(number) = standalone_number(&msg.normalized) {
            if number > 1_000 {
                return Ok(ChatResponse::reply_only(
                    compose::compose_number_clarification(number),
                ));
            }
        }

        let filters = self.extractor.extract(&msg);
        tracing::debug!(?filters, "extracted filters");

        if is_unparseable(&filters) {
            return Ok(ChatResponse::reply_only(compose::compose_unparseable()));
        }

        let (matched, path) = pipeline::run(&msg.normalized, &filters, catalog);
        tracing::debug!(?path, matches = matched.len(), "pipeline complete");

        let message = compose::compose(path, &filters, matched.len());
        Ok(ChatResponse {
            message,
            properties: matched,
        })
    }

    /// Handle one of the four predefined suggestion strings with its fixed,
    /// hand-written filter. Any other string is an input error.
    pub fn handle_suggestion(
        &self,
        suggestion: &str,
        catalog: &[Listing],
    ) -> Result<Vec<Listing>, EngineError> {
        if !PREDEFINED_SUGGESTIONS.contains(&suggestion) {
            return Err(EngineError::InvalidSuggestion(suggestion.to_string()));
        }

        let matched = match suggestion.to_lowercase().as_str() {
            "show me properties under $500,000" => catalog
                .iter()
                .filter(|l| l.price <= 500_000.0)
                .cloned()
                .collect(),
            "i want a 3-bedrooms apartment in new york" => catalog
                .iter()
                .filter(|l| {
                    let location = l.location.to_lowercase();
                    l.bedrooms == 3
                        && l.is_type("apartment")
                        && (location.contains("new york") || location.contains("ny"))
                })
                .cloned()
                .collect(),
            "find apartment with a swimming pool" => catalog
                .iter()
                .filter(|l| {
                    l.is_type("apartment")
                        && l.amenities
                            .iter()
                            .any(|a| a.to_lowercase().contains("swimming pool"))
                })
                .cloned()
                .collect(),
            "show me villas with a private garden" => catalog
                .iter()
                .filter(|l| {
                    l.is_type("villa")
                        && l.amenities
                            .iter()
                            .any(|a| a.to_lowercase().contains("private garden"))
                })
                .cloned()
                .collect(),
            // Unreachable: membership was checked against the same table.
            _ => Vec::new(),
        };

        Ok(matched)
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new(ReplyTable::default())
    }
}

/// Parse a message consisting solely of digits.
fn standalone_number(normalized: &str) -> Option<u64> {
    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        normalized.parse().ok()
    } else {
        None
    }
}

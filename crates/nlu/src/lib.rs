//! Query understanding for PropBot
//!
//! Rule-based NLU over free-form property search text: normalization, the
//! conversational classifier, and one entity extractor per concern. All of
//! it is pure and allocation-light; patterns compile once per extractor and
//! the vocabularies are process-wide constants.
//!
//! # Example
//!
//! ```
//! use propbot_nlu::{FilterExtractor, NormalizedMessage};
//!
//! let extractor = FilterExtractor::new();
//! let msg = NormalizedMessage::new("3 bedroom apartment in Dallas under $400,000");
//! let filters = extractor.extract(&msg);
//!
//! assert_eq!(filters.bedrooms, Some(3));
//! assert_eq!(filters.property_type.as_deref(), Some("apartment"));
//! ```

mod classifier;
mod extract;
mod normalize;
pub mod vocab;

pub use classifier::{classify, ClassifiedReply};
pub use extract::{has_price_context, FilterExtractor};
pub use normalize::NormalizedMessage;

use propbot_core::ExtractedFilters;

/// Gibberish check: a message where no extractor produced any value is
/// unparseable and short-circuits to a help-style reply without touching
/// the catalog.
pub fn is_unparseable(filters: &ExtractedFilters) -> bool {
    filters.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_is_empty_filters() {
        assert!(is_unparseable(&ExtractedFilters::default()));

        let filters = ExtractedFilters {
            bedrooms: Some(2),
            ..Default::default()
        };
        assert!(!is_unparseable(&filters));
    }
}

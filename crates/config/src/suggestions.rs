//! Predefined suggestion strings
//!
//! The suggestion endpoint accepts exactly these four strings, verbatim;
//! anything else is rejected as an input error.

pub const PREDEFINED_SUGGESTIONS: [&str; 4] = [
    "Show me properties under $500,000",
    "I want a 3-bedrooms apartment in New York",
    "Find Apartment with a swimming pool",
    "Show me villas with a private garden",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_suggestions_exactly() {
        assert_eq!(PREDEFINED_SUGGESTIONS.len(), 4);
        assert!(PREDEFINED_SUGGESTIONS
            .iter()
            .all(|s| !s.trim().is_empty()));
    }
}

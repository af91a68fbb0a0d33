//! Entity extractors
//!
//! One pure extractor per concern: property type, bedrooms, bathrooms, size,
//! price value and comparator, location, amenities and explicit listing ids.
//! Each returns an optional typed value (the amenity extractor is set-valued)
//! and embeds its own disambiguation guard, so a number next to a currency
//! symbol never parses as a bedroom count.

use once_cell::sync::Lazy;
use regex::Regex;

use propbot_core::{ExtractedFilters, PriceComparator, PriceCriterion};

use crate::normalize::NormalizedMessage;
use crate::vocab::{AMENITY_VARIANTS, KNOWN_PLACES, PROPERTY_TYPE_VARIANTS};

/// Filter extractor with compiled patterns.
pub struct FilterExtractor {
    /// One whole-word pattern per canonical type, in tie-break order
    type_patterns: Vec<(&'static str, Regex)>,
    /// One hyphen/slash tolerant pattern per amenity variant
    amenity_patterns: Vec<(&'static str, Regex)>,
    /// Known place names, whole-word, case-insensitive
    place_pattern: Regex,
    /// "in/at/near X" fallback over original-case text
    place_fallback: Regex,
    bedroom_pattern: Regex,
    bathroom_pattern: Regex,
    size_pattern: Regex,
    price_prefix: Regex,
    price_suffix: Regex,
    price_of_fallback: Regex,
    id_pattern: Regex,
}

/// Price keywords and symbols establishing price context; a number without
/// this context is never interpreted as a price.
static PRICE_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[$₹€£]|(?:^|\s)(?:price|cost|budget|dollars?|rupees?|rs|inr|usd|under|below|less than|upto|up to|above|over|more than|from)(?:$|\s)",
    )
    .unwrap()
});

/// Currency adjacent to a number; used to keep "$300000" out of the
/// bedroom extractor.
static PRICE_ADJACENT_GUARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:price|cost|budget|dollars?|rupees?|rs|inr|usd|[$₹€£])\s*$").unwrap()
});

static COMPARATOR_BELOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:under|below|less\s+than|upto|up\s+to)\b").unwrap());
static COMPARATOR_ABOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:above|over|more\s+than|from)\b").unwrap());
static COMPARATOR_EQUAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:exactly|equal\s+to|price\s+of|at)\b").unwrap());
static CURRENCY_PRESENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[$₹€£]|\b(?:dollars?|rupees?|rs|inr|usd)\b").unwrap());

static ID_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:,|\band\b|\s)+").unwrap());

impl FilterExtractor {
    pub fn new() -> Self {
        Self {
            type_patterns: Self::build_type_patterns(),
            amenity_patterns: Self::build_amenity_patterns(),
            place_pattern: Self::build_place_pattern(),
            place_fallback: Regex::new(
                r"(?:\bin|\bat|\bnear)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
            )
            .unwrap(),
            bedroom_pattern: Regex::new(r"(?i)(\d+)[\s-]*(?:bed\s*rooms?|beds?|br|bhk)\b")
                .unwrap(),
            bathroom_pattern: Regex::new(r"(?i)(\d+)[\s-]*(?:bath\s*rooms?|baths?|bth|ba)\b")
                .unwrap(),
            size_pattern: Regex::new(
                r"(?i)(\d[\d,]*)\s*(?:square\s+feet|sq\.?\s*ft|sq\.?\s*m|sqm|sqft)\b",
            )
            .unwrap(),
            price_prefix: Regex::new(
                r"(?i)(?:[$₹€£]|\b(?:dollars?|rupees?|rs|inr|usd|price|cost|budget|under|below|upto|up\s+to|less\s+than|above|over|more\s+than|from)\b)\s*(\d[\d,.]*)",
            )
            .unwrap(),
            price_suffix: Regex::new(r"(?i)(\d[\d,.]*)\s*(?:dollars?|rupees?|rs|inr|usd)\b")
                .unwrap(),
            price_of_fallback: Regex::new(r"(?i)\bof\s+(\d[\d,.]*)").unwrap(),
            id_pattern: Regex::new(r"(?i)\bids?\s*:?\s*(\d+(?:\s*(?:,|and)?\s*\d+)*)").unwrap(),
        }
    }

    fn build_type_patterns() -> Vec<(&'static str, Regex)> {
        PROPERTY_TYPE_VARIANTS
            .iter()
            .map(|(canonical, variants)| {
                let alternation = variants
                    .iter()
                    .map(|v| regex::escape(v))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
                    .unwrap_or_else(|e| panic!("bad type pattern for {canonical}: {e}"));
                (*canonical, pattern)
            })
            .collect()
    }

    fn build_amenity_patterns() -> Vec<(&'static str, Regex)> {
        AMENITY_VARIANTS
            .iter()
            .flat_map(|(canonical, variants)| {
                variants.iter().map(move |variant| {
                    // Separators inside a phrase tolerate space, hyphen and
                    // slash interchangeably ("two-car garage" == "two car garage").
                    let tokens = variant
                        .split(['-', '/', ' '])
                        .filter(|t| !t.is_empty())
                        .map(regex::escape)
                        .collect::<Vec<_>>()
                        .join(r"[\s/-]+");
                    let pattern = Regex::new(&format!(r"(?i)\b{tokens}\b"))
                        .unwrap_or_else(|e| panic!("bad amenity pattern for {canonical}: {e}"));
                    (*canonical, pattern)
                })
            })
            .collect()
    }

    fn build_place_pattern() -> Regex {
        let alternation = KNOWN_PLACES
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
    }

    /// Run every extractor over one message.
    pub fn extract(&self, msg: &NormalizedMessage) -> ExtractedFilters {
        let price_value = self.extract_price(&msg.normalized);
        ExtractedFilters {
            property_type: self.detect_property_type(&msg.normalized),
            bedrooms: self.extract_bedrooms(&msg.normalized),
            bathrooms: self.extract_bathrooms(&msg.normalized),
            size_sqft: self.extract_size(&msg.normalized),
            price: price_value.map(|value| PriceCriterion {
                value,
                comparator: self
                    .extract_price_comparator(&msg.normalized)
                    .unwrap_or(PriceComparator::Equal),
            }),
            location: self.extract_location(&msg.original),
            amenities: self.extract_amenities(&msg.normalized),
            ids: self.extract_ids(&msg.normalized),
        }
    }

    /// Canonical property type on first variant-table match, ties broken by
    /// declaration order.
    pub fn detect_property_type(&self, text: &str) -> Option<String> {
        self.type_patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(canonical, _)| canonical.to_string())
    }

    /// Bedroom count from a number with a bedroom-unit suffix. Numbers in
    /// price position (directly after a currency symbol or price keyword)
    /// are skipped so "$300000" never parses as 300000 bedrooms.
    pub fn extract_bedrooms(&self, text: &str) -> Option<u32> {
        for caps in self.bedroom_pattern.captures_iter(text) {
            let num = caps.get(1)?;
            if PRICE_ADJACENT_GUARD.is_match(&text[..num.start()]) {
                tracing::debug!(token = num.as_str(), "skipping bedroom match in price position");
                continue;
            }
            if let Ok(n) = num.as_str().parse::<u32>() {
                return Some(n);
            }
        }
        None
    }

    /// Bathroom count; the unit token is unambiguous so no price guard.
    pub fn extract_bathrooms(&self, text: &str) -> Option<u32> {
        self.bathroom_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Floor area in square feet.
    pub fn extract_size(&self, text: &str) -> Option<f64> {
        self.size_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().replace(',', "").parse().ok())
    }

    /// Price value; only fires when price context is present. Thousands
    /// separators are accepted ("$500,000").
    pub fn extract_price(&self, text: &str) -> Option<f64> {
        if !has_price_context(text) {
            return None;
        }

        let capture = self
            .price_prefix
            .captures(text)
            .or_else(|| self.price_suffix.captures(text))
            .or_else(|| self.price_of_fallback.captures(text))?;

        capture
            .get(1)
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
    }

    /// Price comparator from range keywords; a bare currency mention with no
    /// range keyword means an exact price.
    pub fn extract_price_comparator(&self, text: &str) -> Option<PriceComparator> {
        if COMPARATOR_BELOW.is_match(text) {
            Some(PriceComparator::Below)
        } else if COMPARATOR_ABOVE.is_match(text) {
            Some(PriceComparator::Above)
        } else if COMPARATOR_EQUAL.is_match(text) || CURRENCY_PRESENT.is_match(text) {
            Some(PriceComparator::Equal)
        } else {
            None
        }
    }

    /// First recognized place name from the original-case text, falling back
    /// to a capitalized word after "in"/"at"/"near".
    pub fn extract_location(&self, original: &str) -> Option<String> {
        if let Some(m) = self.place_pattern.find(original) {
            let canonical = KNOWN_PLACES
                .iter()
                .find(|p| p.eq_ignore_ascii_case(m.as_str()))
                .copied()
                .unwrap_or(m.as_str());
            return Some(canonical.to_string());
        }

        self.place_fallback
            .captures(original)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|loc| (3..=30).contains(&loc.len()))
    }

    /// Every known amenity found in the message, deduplicated and in
    /// vocabulary order. Overlapping matches resolve longest-span-first, so
    /// "community pool" does not additionally yield "swimming pool".
    pub fn extract_amenities(&self, text: &str) -> Vec<String> {
        let mut candidates: Vec<(usize, usize, &str)> = Vec::new();
        for (canonical, pattern) in &self.amenity_patterns {
            for m in pattern.find_iter(text) {
                candidates.push((m.start(), m.end(), canonical));
            }
        }
        candidates.sort_by(|a, b| (b.1 - b.0).cmp(&(a.1 - a.0)).then(a.0.cmp(&b.0)));

        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut found: Vec<&str> = Vec::new();
        for (start, end, canonical) in candidates {
            if claimed.iter().any(|&(s, e)| start < e && s < end) {
                continue;
            }
            claimed.push((start, end));
            if !found.contains(&canonical) {
                found.push(canonical);
            }
        }

        // Vocabulary order keeps the reply summary deterministic.
        AMENITY_VARIANTS
            .iter()
            .filter(|(canonical, _)| found.contains(canonical))
            .map(|(canonical, _)| canonical.to_string())
            .collect()
    }

    /// Explicit listing ids: "id 3", "ids 1,2 and 4", "id: 5".
    pub fn extract_ids(&self, text: &str) -> Vec<u64> {
        let Some(caps) = self.id_pattern.captures(text) else {
            return Vec::new();
        };
        let Some(list) = caps.get(1) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        for token in ID_SPLIT.split(list.as_str()) {
            if let Ok(id) = token.trim().parse::<u64>() {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

impl Default for FilterExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the message carries price context: a currency symbol, or a
/// price/range keyword with word boundaries.
pub fn has_price_context(text: &str) -> bool {
    PRICE_CONTEXT.is_match(text)
}

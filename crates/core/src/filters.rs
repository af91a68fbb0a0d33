//! Extracted search filters
//!
//! Built fresh for every request by the NLU extractors and discarded after
//! the response is composed. At most one of the id-list path, the exact-title
//! path, and the attribute-filter path is active per request; the pipeline in
//! the engine crate enforces that precedence.

use serde::{Deserialize, Serialize};

/// How an extracted price value constrains the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceComparator {
    /// price <= value ("under", "below", "less than", "up to")
    Below,
    /// price >= value ("above", "over", "more than", "from")
    Above,
    /// price == value (explicit equality words, or a bare currency amount)
    Equal,
}

/// A price constraint: numeric value plus comparator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceCriterion {
    pub value: f64,
    pub comparator: PriceComparator,
}

impl PriceCriterion {
    pub fn matches(&self, price: f64) -> bool {
        match self.comparator {
            PriceComparator::Below => price <= self.value,
            PriceComparator::Above => price >= self.value,
            PriceComparator::Equal => price == self.value,
        }
    }
}

/// Criteria extracted from one chat message.
///
/// Every field is optional; an empty amenity set means "no amenity filter",
/// not "must have zero amenities". Bedrooms, bathrooms and size use exact
/// equality on the chat path, reproducing observed production behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFilters {
    /// Canonical property type from the variant table
    pub property_type: Option<String>,
    /// Exact bedroom count
    pub bedrooms: Option<u32>,
    /// Exact bathroom count
    pub bathrooms: Option<u32>,
    /// Exact floor area in square feet
    pub size_sqft: Option<f64>,
    /// Price value and comparator
    pub price: Option<PriceCriterion>,
    /// Location substring, original casing preserved
    pub location: Option<String>,
    /// Canonical amenity names, deduplicated
    pub amenities: Vec<String>,
    /// Explicit listing ids ("id 3", "ids 1, 2 and 4")
    pub ids: Vec<u64>,
}

impl ExtractedFilters {
    /// True when no extractor produced a value; such a request is treated
    /// as unparseable and answered with guidance instead of a search.
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.size_sqft.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.amenities.is_empty()
            && self.ids.is_empty()
    }

    /// True when the only extracted criterion is a bedroom count. The
    /// composer uses a dedicated refinement message for this case.
    pub fn is_bedrooms_only(&self) -> bool {
        self.bedrooms.is_some()
            && self.property_type.is_none()
            && self.price.is_none()
            && self.location.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparator_semantics() {
        let below = PriceCriterion {
            value: 500_000.0,
            comparator: PriceComparator::Below,
        };
        assert!(below.matches(500_000.0));
        assert!(below.matches(400_000.0));
        assert!(!below.matches(500_001.0));

        let above = PriceCriterion {
            value: 300_000.0,
            comparator: PriceComparator::Above,
        };
        assert!(above.matches(300_000.0));
        assert!(!above.matches(299_999.0));

        let equal = PriceCriterion {
            value: 450_000.0,
            comparator: PriceComparator::Equal,
        };
        assert!(equal.matches(450_000.0));
        assert!(!equal.matches(450_001.0));
    }

    #[test]
    fn default_filters_are_empty() {
        assert!(ExtractedFilters::default().is_empty());
    }

    #[test]
    fn bedrooms_only_detection() {
        let f = ExtractedFilters {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert!(f.is_bedrooms_only());

        let with_type = ExtractedFilters {
            bedrooms: Some(3),
            property_type: Some("apartment".to_string()),
            ..Default::default()
        };
        assert!(!with_type.is_bedrooms_only());

        // Bathrooms alongside bedrooms still counts as "bedrooms only":
        // the refinement message keys off type, price and location.
        let with_baths = ExtractedFilters {
            bedrooms: Some(3),
            bathrooms: Some(2),
            ..Default::default()
        };
        assert!(with_baths.is_bedrooms_only());
    }
}

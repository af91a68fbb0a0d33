//! Listing record and chat wire types

use serde::{Deserialize, Serialize};

/// One property record in the catalog.
///
/// Owned by the catalog store and read-only to the engine. The identifier is
/// stable and unique across the snapshot used for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier
    pub id: u64,
    /// Listing title, e.g. "Modern Downtown Apartment"
    pub title: String,
    /// Free-form "City, Region" location
    pub location: String,
    /// Asking price (non-negative)
    pub price: f64,
    /// Bedroom count
    pub bedrooms: u32,
    /// Bathroom count
    pub bathrooms: u32,
    /// Floor area in square feet
    pub size_sqft: f64,
    /// Property type, loosely stored ("apartment", "villa", ...)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Amenity names, possibly empty
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Image URL; `None` when the images source had no entry for this id
    #[serde(default)]
    pub image: Option<String>,
}

impl Listing {
    /// Case-insensitive check that the listing is of the given canonical type,
    /// matching either the stored type or the title (the catalog stores the
    /// type loosely, so titles like "Luxury Villa Retreat" also count).
    pub fn is_type(&self, canonical: &str) -> bool {
        self.property_type.eq_ignore_ascii_case(canonical)
            || self.title.to_lowercase().contains(canonical)
    }

    /// Case-insensitive check that the listing offers the given amenity.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(amenity))
    }

    /// Short human-readable description used in replies.
    pub fn short_desc(&self) -> String {
        format!("{} in {} for ${}", self.title, self.location, self.price)
    }
}

/// Chat endpoint response: a reply string plus the matching listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Natural-language reply
    pub message: String,
    /// Matching listings, in catalog order; empty on conversational turns
    pub properties: Vec<Listing>,
}

impl ChatResponse {
    /// A conversational reply that carries no listings.
    pub fn reply_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            properties: Vec::new(),
        }
    }
}

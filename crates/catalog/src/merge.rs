//! Three-source outer join
//!
//! Basics is the primary source; characteristics and images are joined onto
//! it by id. The join is left-outer: a basics row with no counterpart still
//! yields a listing.

use serde::Deserialize;

use propbot_core::Listing;

/// Primary source row: identity, title, location, price.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicsRecord {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub price: f64,
}

/// Characteristics row: rooms, size, type and amenities.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacteristicsRecord {
    pub id: u64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub size_sqft: f64,
    #[serde(default, rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Images row.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub id: u64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Join the three sources into listings, in basics order.
pub fn merge_sources(
    basics: Vec<BasicsRecord>,
    characteristics: Vec<CharacteristicsRecord>,
    images: Vec<ImageRecord>,
) -> Vec<Listing> {
    basics
        .into_iter()
        .map(|b| {
            let chars = characteristics.iter().find(|c| c.id == b.id);
            let image = images
                .iter()
                .find(|i| i.id == b.id)
                .and_then(|i| i.image_url.clone());

            Listing {
                id: b.id,
                title: b.title,
                location: b.location,
                price: b.price,
                bedrooms: chars.map(|c| c.bedrooms).unwrap_or_default(),
                bathrooms: chars.map(|c| c.bathrooms).unwrap_or_default(),
                size_sqft: chars.map(|c| c.size_sqft).unwrap_or_default(),
                property_type: chars
                    .map(|c| c.property_type.clone())
                    .unwrap_or_default(),
                amenities: chars.map(|c| c.amenities.clone()).unwrap_or_default(),
                image,
            }
        })
        .collect()
}

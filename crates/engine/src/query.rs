//! Structured filter queries
//!
//! The non-conversational filter surface: every criterion arrives already
//! structured, so there is no extraction step and the numeric comparisons
//! are range-style (`>=` minimums) rather than the chat path's exact
//! equality.

use serde::Deserialize;

use propbot_core::Listing;

/// A structured catalog query. Every field is optional; absent fields do
/// not constrain the result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    pub locations: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub amenities: Vec<String>,
    pub keyword: Option<String>,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.min_size.is_none()
            && self.max_size.is_none()
            && self.amenities.is_empty()
            && self.keyword.is_none()
    }

    /// Apply every present criterion, AND-combined, preserving catalog order.
    pub fn apply(&self, catalog: &[Listing]) -> Vec<Listing> {
        catalog
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }

    fn matches(&self, listing: &Listing) -> bool {
        if !self.locations.is_empty()
            && !self
                .locations
                .iter()
                .any(|loc| location_matches(&listing.location, loc))
        {
            return false;
        }
        if self.min_price.map_or(false, |min| listing.price < min) {
            return false;
        }
        if self.max_price.map_or(false, |max| listing.price > max) {
            return false;
        }
        if self.bedrooms.map_or(false, |n| listing.bedrooms < n) {
            return false;
        }
        if self.bathrooms.map_or(false, |n| listing.bathrooms < n) {
            return false;
        }
        if self.min_size.map_or(false, |min| listing.size_sqft < min) {
            return false;
        }
        if self.max_size.map_or(false, |max| listing.size_sqft > max) {
            return false;
        }
        if !self
            .amenities
            .iter()
            .all(|wanted| listing.has_amenity(wanted))
        {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !listing.title.to_lowercase().contains(&keyword)
                && !listing.location.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        true
    }
}

/// City-level location matching: "New York" matches "New York, NY" in
/// either direction, compared on the part before the first comma.
fn location_matches(listing_location: &str, wanted: &str) -> bool {
    let listing_location = listing_location.to_lowercase();
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }
    if listing_location == wanted {
        return true;
    }
    let listing_city = listing_location
        .split(',')
        .next()
        .unwrap_or(&listing_location)
        .trim()
        .to_string();
    let wanted_city = wanted.split(',').next().unwrap_or(&wanted).trim();
    listing_location.starts_with(wanted_city) || wanted.starts_with(&listing_city)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64, location: &str, price: f64, bedrooms: u32, amenities: &[&str]) -> Listing {
        Listing {
            id,
            title: format!("Listing {id}"),
            location: location.to_string(),
            price,
            bedrooms,
            bathrooms: 2,
            size_sqft: 1_200.0,
            property_type: "apartment".to_string(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            image: None,
        }
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing(1, "New York, NY", 450_000.0, 3, &["Gym"]),
            listing(2, "Dallas, TX", 300_000.0, 2, &["Swimming Pool"]),
            listing(3, "New York, NY", 750_000.0, 4, &["Gym", "Swimming Pool"]),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        let query = FilterQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.apply(&catalog()).len(), 3);
    }

    #[test]
    fn city_matches_without_state_suffix() {
        let query = FilterQuery {
            locations: vec!["New York".to_string()],
            ..Default::default()
        };
        let ids: Vec<u64> = query.apply(&catalog()).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn bedrooms_is_a_minimum() {
        let query = FilterQuery {
            bedrooms: Some(3),
            ..Default::default()
        };
        let ids: Vec<u64> = query.apply(&catalog()).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let query = FilterQuery {
            min_price: Some(300_000.0),
            max_price: Some(450_000.0),
            ..Default::default()
        };
        let ids: Vec<u64> = query.apply(&catalog()).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn all_requested_amenities_must_be_present() {
        let query = FilterQuery {
            amenities: vec!["gym".to_string(), "swimming pool".to_string()],
            ..Default::default()
        };
        let ids: Vec<u64> = query.apply(&catalog()).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn keyword_searches_title_and_location() {
        let query = FilterQuery {
            keyword: Some("dallas".to_string()),
            ..Default::default()
        };
        let ids: Vec<u64> = query.apply(&catalog()).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2]);
    }
}

//! Filter pipeline
//!
//! Three mutually exclusive search paths, first applicable wins:
//! exact-title lookup, id-list lookup, then the attribute filters as a
//! sequential AND-reduction in fixed order. A stage with no extracted
//! criterion passes everything through; zero matches is a valid outcome,
//! never an error.

use propbot_core::{ExtractedFilters, Listing};

/// Which search path produced the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPath {
    /// The whole message equaled a listing title
    ExactTitle,
    /// Explicit ids were extracted
    IdLookup,
    /// Default AND-combination of attribute filters
    Attribute,
}

/// Run the pipeline over one catalog snapshot.
///
/// Results keep catalog order; running twice on the same filters and
/// snapshot yields the identical list.
pub fn run(
    normalized: &str,
    filters: &ExtractedFilters,
    catalog: &[Listing],
) -> (Vec<Listing>, SearchPath) {
    // 1. Exact title match bypasses every other filter.
    if let Some(listing) = catalog
        .iter()
        .find(|l| l.title.to_lowercase() == normalized)
    {
        return (vec![listing.clone()], SearchPath::ExactTitle);
    }

    // 2. Id lookup: exactly the listings whose id was requested, in catalog
    //    order. Unknown ids are simply absent.
    if !filters.ids.is_empty() {
        let matched = catalog
            .iter()
            .filter(|l| filters.ids.contains(&l.id))
            .cloned()
            .collect();
        return (matched, SearchPath::IdLookup);
    }

    // 3. Attribute filters, fixed order: type, bedrooms, price, location,
    //    bathrooms, size, amenities.
    let matched = catalog
        .iter()
        .filter(|l| {
            filters
                .property_type
                .as_deref()
                .map_or(true, |t| l.is_type(t))
        })
        .filter(|l| filters.bedrooms.map_or(true, |b| l.bedrooms == b))
        .filter(|l| filters.price.map_or(true, |p| p.matches(l.price)))
        .filter(|l| {
            filters.location.as_deref().map_or(true, |loc| {
                l.location.to_lowercase().contains(&loc.to_lowercase())
            })
        })
        .filter(|l| filters.bathrooms.map_or(true, |b| l.bathrooms == b))
        .filter(|l| filters.size_sqft.map_or(true, |s| l.size_sqft == s))
        .filter(|l| filters.amenities.iter().all(|a| l.has_amenity(a)))
        .cloned()
        .collect();

    (matched, SearchPath::Attribute)
}

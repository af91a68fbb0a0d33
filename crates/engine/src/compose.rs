//! Response composer
//!
//! Builds the reply string from the active search path, the extracted
//! filters and the result count. Filter summaries enumerate criteria in the
//! fixed human-readable order: type, bedrooms, price, location, bathrooms,
//! size, amenities.

use propbot_core::{ExtractedFilters, PriceComparator};

use crate::pipeline::SearchPath;

/// Compose the reply for a search turn.
pub fn compose(path: SearchPath, filters: &ExtractedFilters, result_count: usize) -> String {
    if path == SearchPath::IdLookup {
        return compose_id_lookup(&filters.ids, result_count);
    }

    // A lone bedroom criterion gets a dedicated refinement message.
    if filters.is_bedrooms_only() {
        if let Some(bedrooms) = filters.bedrooms {
            return compose_bedrooms_only(bedrooms, result_count);
        }
    }

    let summary = filter_summary(filters);
    if summary.is_empty() {
        if result_count > 0 {
            "Here are some properties matching your query:".to_string()
        } else {
            "I couldn't find matching properties. Please try:\n\
             - Different search terms\n\
             - Fewer filters\n\
             - Checking for typos"
                .to_string()
        }
    } else if result_count == 0 {
        format!(
            "No properties found with {}.\n\
             Suggestions:\n\
             - Broaden your search criteria\n\
             - Check nearby locations\n\
             - Adjust price range or amenities",
            summary.join(" ")
        )
    } else {
        format!(
            "Found {} properties with {}:",
            result_count,
            summary.join(" ")
        )
    }
}

/// Clarification reply for a message that is nothing but a large number.
pub fn compose_number_clarification(number: u64) -> String {
    format!(
        "I see you mentioned {number}. Could you please clarify:\n\
         - Is this a price (e.g., ${number})?\n\
         - Square footage?\n\
         - Number of bedrooms?\n\
         For better results, please include details like:\n\
         - Property type (apartment, villa, etc.)\n\
         - Location\n\
         - Amenities you're looking for"
    )
}

/// Guidance reply for a message where no extractor produced anything.
pub fn compose_unparseable() -> String {
    "I couldn't understand your property search query. Please try something like:\n\
     - '3 bedroom apartments in New York'\n\
     - 'Houses under $500,000'\n\
     - 'Villas with swimming pool'"
        .to_string()
}

fn compose_id_lookup(ids: &[u64], result_count: usize) -> String {
    let id_list = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if result_count == 0 {
        format!("No properties found with IDs: {id_list}.")
    } else {
        format!(
            "Found {} propert{} with IDs: {}",
            result_count,
            if result_count == 1 { "y" } else { "ies" },
            id_list
        )
    }
}

fn compose_bedrooms_only(bedrooms: u32, result_count: usize) -> String {
    let plural = if bedrooms > 1 { "s" } else { "" };
    if result_count == 0 {
        format!(
            "I couldn't find properties with {bedrooms} bedroom{plural}.\n\
             Would you like to specify:\n\
             - A location (e.g., \"in New York\")\n\
             - A property type (e.g., \"apartment\" or \"villa\")\n\
             - A price range (e.g., \"under $500,000\")"
        )
    } else {
        format!(
            "Here are properties with {bedrooms} bedroom{plural}.\n\
             You can refine your search by adding:\n\
             - Location (e.g., \"in Chicago\")\n\
             - Price (e.g., \"under $300,000\")\n\
             - Property type (e.g., \"condo\")"
        )
    }
}

/// Human-readable filter fragments in the fixed summary order.
fn filter_summary(filters: &ExtractedFilters) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(t) = &filters.property_type {
        parts.push(t.clone());
    }
    if let Some(b) = filters.bedrooms {
        parts.push(format!("{b} bedroom{}", if b > 1 { "s" } else { "" }));
    }
    if let Some(p) = filters.price {
        let word = match p.comparator {
            PriceComparator::Below => "under",
            PriceComparator::Above => "above",
            PriceComparator::Equal => "at",
        };
        parts.push(format!("{word} ${}", format_thousands(p.value)));
    }
    if let Some(loc) = &filters.location {
        parts.push(format!("in {loc}"));
    }
    if let Some(b) = filters.bathrooms {
        parts.push(format!("{b} bathroom{}", if b > 1 { "s" } else { "" }));
    }
    if let Some(s) = filters.size_sqft {
        parts.push(format!("{} sqft", format_thousands(s)));
    }
    if !filters.amenities.is_empty() {
        parts.push(format!("with {}", filters.amenities.join(", ")));
    }
    parts
}

/// Group an integral value with comma thousands separators ("500,000").
fn format_thousands(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use propbot_core::PriceCriterion;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(500_000.0), "500,000");
        assert_eq!(format_thousands(1_250_000.0), "1,250,000");
        assert_eq!(format_thousands(900.0), "900");
    }

    #[test]
    fn id_lookup_messages() {
        let ids = vec![1, 4];
        assert_eq!(
            compose_id_lookup(&ids, 0),
            "No properties found with IDs: 1, 4."
        );
        assert_eq!(
            compose_id_lookup(&ids, 2),
            "Found 2 properties with IDs: 1, 4"
        );
        assert_eq!(compose_id_lookup(&[7], 1), "Found 1 property with IDs: 7");
    }

    #[test]
    fn summary_follows_fixed_order() {
        let filters = ExtractedFilters {
            property_type: Some("apartment".to_string()),
            bedrooms: Some(3),
            price: Some(PriceCriterion {
                value: 500_000.0,
                comparator: PriceComparator::Below,
            }),
            location: Some("New York".to_string()),
            bathrooms: Some(2),
            size_sqft: Some(1_400.0),
            amenities: vec!["gym".to_string(), "parking".to_string()],
            ids: Vec::new(),
        };
        let message = compose(SearchPath::Attribute, &filters, 2);
        assert_eq!(
            message,
            "Found 2 properties with apartment 3 bedrooms under $500,000 \
             in New York 2 bathrooms 1,400 sqft with gym, parking:"
        );
    }

    #[test]
    fn zero_results_with_filters_suggests_broadening() {
        let filters = ExtractedFilters {
            property_type: Some("villa".to_string()),
            location: Some("Chicago".to_string()),
            ..Default::default()
        };
        let message = compose(SearchPath::Attribute, &filters, 0);
        assert!(message.starts_with("No properties found with villa in Chicago."));
        assert!(message.contains("Broaden your search criteria"));
    }

    #[test]
    fn bedrooms_only_has_two_branches() {
        let filters = ExtractedFilters {
            bedrooms: Some(2),
            ..Default::default()
        };
        let found = compose(SearchPath::Attribute, &filters, 3);
        assert!(found.starts_with("Here are properties with 2 bedrooms."));

        let none = compose(SearchPath::Attribute, &filters, 0);
        assert!(none.starts_with("I couldn't find properties with 2 bedrooms."));
    }

    #[test]
    fn exact_title_without_other_filters_uses_generic_reply() {
        let message = compose(SearchPath::ExactTitle, &ExtractedFilters::default(), 1);
        assert_eq!(message, "Here are some properties matching your query:");
    }
}

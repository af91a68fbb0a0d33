//! Static vocabularies
//!
//! Immutable process-wide lookup tables: canonical property types with their
//! recognized surface forms (plurals and common typos included), known
//! amenity phrases, recognized place names and given names. Declaration
//! order is part of the contract: the first declared canonical type wins a
//! tie, so changing the order changes behavior.

/// Canonical property types and their surface variants, in tie-break order.
pub const PROPERTY_TYPE_VARIANTS: &[(&str, &[&str])] = &[
    (
        "apartment",
        &[
            "apartment",
            "apartments",
            "apt",
            "apts",
            "appartment",
            "appartments",
            "aprtment",
            "aprtments",
        ],
    ),
    ("villa", &["villa", "villas", "vila"]),
    ("duplex", &["duplex", "duplexes", "duplx"]),
    ("penthouse", &["penthouse", "penthouses", "penthouz"]),
    ("studio", &["studio", "studios", "studi"]),
    ("condo", &["condo", "condos", "kondo", "kondos"]),
    ("house", &["house", "houses", "hous", "houz"]),
    (
        "townhouse",
        &["townhouse", "townhouses", "town house", "town houses", "town home"],
    ),
    ("smart home", &["smart home", "smarthome", "smart homes", "smarthomes"]),
];

/// Canonical amenities and their surface variants.
///
/// Matching is whole-phrase with hyphen/slash tolerance. Overlapping matches
/// are resolved longest-span-first, so "community pool" never also yields
/// "swimming pool" through the bare "pool" variant.
pub const AMENITY_VARIANTS: &[(&str, &[&str])] = &[
    ("gym", &["gym"]),
    ("swimming pool", &["swimming pool", "pool"]),
    ("parking", &["parking"]),
    ("beach access", &["beach access"]),
    ("security", &["security"]),
    ("balcony", &["balcony"]),
    ("private garden", &["private garden", "garden"]),
    ("smart home", &["smart home"]),
    ("garage", &["garage"]),
    ("laundry", &["laundry"]),
    ("rooftop terrace", &["rooftop terrace"]),
    ("smart security", &["smart security"]),
    ("private elevator", &["private elevator"]),
    ("park view", &["park view"]),
    ("24/7 concierge", &["24/7 concierge", "concierge"]),
    ("fitness center", &["fitness center", "fitness centre"]),
    ("private dock", &["private dock"]),
    ("boat parking", &["boat parking"]),
    ("bbq area", &["bbq area", "bbq"]),
    ("backyard", &["backyard"]),
    ("community pool", &["community pool"]),
    ("pet friendly", &["pet friendly", "pet-friendly"]),
    ("home office", &["home office"]),
    ("solar panels", &["solar panels", "solar panel"]),
    ("two-car garage", &["two-car garage", "two car garage"]),
    ("minimalist design", &["minimalist design"]),
    ("smart appliances", &["smart appliances"]),
    ("energy efficient", &["energy efficient", "energy-efficient"]),
];

/// Recognized place names, matched over the original-case text.
/// The catalog is US-centric; abbreviations cover the common metro shorthands.
pub const KNOWN_PLACES: &[&str] = &[
    "New York",
    "Brooklyn",
    "Manhattan",
    "Los Angeles",
    "San Francisco",
    "San Diego",
    "Chicago",
    "Houston",
    "Dallas",
    "Austin",
    "Miami",
    "Orlando",
    "Seattle",
    "Portland",
    "Boston",
    "Denver",
    "Phoenix",
    "Atlanta",
    "Las Vegas",
    "Malibu",
    "Aspen",
    "Nashville",
    "Charlotte",
    "Philadelphia",
];

/// Given names recognized for name capture when no other intent matched.
pub const GIVEN_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "david", "william", "daniel", "kevin", "brian",
    "thomas", "mary", "patricia", "jennifer", "linda", "elizabeth", "susan", "jessica",
    "sarah", "karen", "lisa", "nancy", "emma", "olivia", "sophia", "emily", "anna",
    "rachel", "laura", "alex", "sam", "chris", "tom", "mike", "ayush", "priya", "rahul",
    "amit", "raj", "mira", "arjun", "neha", "rohan",
];

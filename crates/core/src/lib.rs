//! Core domain types for PropBot
//!
//! Shared vocabulary of the workspace: listing records, extracted search
//! filters, conversational intents, and the error taxonomy. This crate has
//! no I/O and no knowledge of the transport or the catalog data sources.

mod error;
mod filters;
mod intent;
mod listing;

pub use error::{CatalogError, EngineError};
pub use filters::{ExtractedFilters, PriceComparator, PriceCriterion};
pub use intent::ConversationalIntent;
pub use listing::{ChatResponse, Listing};

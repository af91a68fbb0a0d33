//! Listing catalog store
//!
//! The engine's external collaborator: joins three property data sources
//! (basics, characteristics, images) by id into read-only [`Listing`]
//! snapshots. Every id present in the basics source resolves to a complete
//! record even when the other sources have no row for it: missing
//! characteristics default to zero/empty, a missing image becomes `None`.

mod merge;
mod source;

pub use merge::{merge_sources, BasicsRecord, CharacteristicsRecord, ImageRecord};
pub use source::{CatalogSource, JsonFileCatalog, StaticCatalog};

//! Search engine for the property chat service.
//!
//! Takes the output of the NLU layer (or a structured query) and turns a
//! catalog snapshot into a ranked-by-catalog-order result set with a
//! composed reply.

pub mod compose;
pub mod engine;
pub mod pipeline;
pub mod query;

pub use engine::ChatEngine;
pub use pipeline::SearchPath;
pub use query::FilterQuery;

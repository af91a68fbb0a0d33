//! Configuration for PropBot
//!
//! Two concerns live here: process settings (bind address, catalog data
//! paths) layered from defaults, an optional TOML file and `PROPBOT_*`
//! environment variables; and the conversational reply table, which is
//! config data rather than code so the phrase/reply pairs can be edited
//! without touching the classifier.

mod replies;
mod settings;
mod suggestions;

pub use replies::{FixedReplies, GreetingEntry, ReplyTable};
pub use settings::{CatalogPaths, ServerSettings, Settings};
pub use suggestions::PREDEFINED_SUGGESTIONS;

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("failed to read reply table {path}: {source}")]
    ReplyIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reply table {path}: {source}")]
    ReplyParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

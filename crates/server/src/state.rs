use std::sync::Arc;

use propbot_catalog::CatalogSource;
use propbot_core::{EngineError, Listing};
use propbot_engine::ChatEngine;

/// Shared server state. `Clone` is cheap: everything inside is `Arc`ed.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(engine: ChatEngine, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            engine: Arc::new(engine),
            catalog,
        }
    }

    /// Fetch the current catalog snapshot.
    pub async fn listings(&self) -> Result<Arc<Vec<Listing>>, EngineError> {
        Ok(self.catalog.snapshot().await?)
    }
}

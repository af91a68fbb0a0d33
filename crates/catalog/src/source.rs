//! Catalog sources
//!
//! The engine only sees [`CatalogSource`]: one awaited snapshot per request,
//! no assumption that snapshot identity is stable across calls. The JSON
//! implementation caches the merged listings after the first load;
//! `refresh` drops the cache when the data files change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use propbot_core::{CatalogError, Listing};

use crate::merge::{merge_sources, BasicsRecord, CharacteristicsRecord, ImageRecord};

/// Read-only provider of catalog snapshots.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Produce the catalog snapshot for one request.
    async fn snapshot(&self) -> Result<Arc<Vec<Listing>>, CatalogError>;
}

/// Catalog backed by three JSON files, joined by id.
pub struct JsonFileCatalog {
    basics_path: PathBuf,
    characteristics_path: PathBuf,
    images_path: PathBuf,
    cache: RwLock<Option<Arc<Vec<Listing>>>>,
}

impl JsonFileCatalog {
    pub fn new(
        basics: impl Into<PathBuf>,
        characteristics: impl Into<PathBuf>,
        images: impl Into<PathBuf>,
    ) -> Self {
        Self {
            basics_path: basics.into(),
            characteristics_path: characteristics.into(),
            images_path: images.into(),
            cache: RwLock::new(None),
        }
    }

    /// Drop the cached snapshot; the next request reloads from disk.
    pub fn refresh(&self) {
        *self.cache.write() = None;
    }

    fn load(&self) -> Result<Arc<Vec<Listing>>, CatalogError> {
        let basics: Vec<BasicsRecord> = read_json(&self.basics_path)?;
        let characteristics: Vec<CharacteristicsRecord> = read_json(&self.characteristics_path)?;
        let images: Vec<ImageRecord> = read_json(&self.images_path)?;

        let listings = merge_sources(basics, characteristics, images);
        tracing::info!(count = listings.len(), "loaded catalog snapshot");
        Ok(Arc::new(listings))
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn snapshot(&self) -> Result<Arc<Vec<Listing>>, CatalogError> {
        if let Some(cached) = self.cache.read().clone() {
            return Ok(cached);
        }
        let listings = self.load()?;
        *self.cache.write() = Some(listings.clone());
        Ok(listings)
    }
}

/// Fixed in-memory catalog, used in tests and demos.
pub struct StaticCatalog {
    listings: Arc<Vec<Listing>>,
}

impl StaticCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn snapshot(&self) -> Result<Arc<Vec<Listing>>, CatalogError> {
        Ok(self.listings.clone())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_sources(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
        let basics = dir.join("basics.json");
        let chars = dir.join("chars.json");
        let images = dir.join("images.json");
        std::fs::write(
            &basics,
            r#"[{"id": 1, "title": "City Flat", "location": "Chicago, IL", "price": 250000}]"#,
        )
        .unwrap();
        std::fs::write(
            &chars,
            r#"[{"id": 1, "bedrooms": 2, "bathrooms": 1, "size_sqft": 900, "type": "apartment", "amenities": ["Gym"]}]"#,
        )
        .unwrap();
        std::fs::write(&images, "[]").unwrap();
        (basics, chars, images)
    }

    #[tokio::test]
    async fn loads_and_caches_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let (basics, chars, images) = write_sources(dir.path());
        let catalog = JsonFileCatalog::new(&basics, &chars, &images);

        let first = catalog.snapshot().await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].property_type, "apartment");

        // Cached: same Arc until refresh.
        let second = catalog.snapshot().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        catalog.refresh();
        let third = catalog.snapshot().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let catalog = JsonFileCatalog::new("nope.json", "nope.json", "nope.json");
        let err = catalog.snapshot().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn static_catalog_serves_fixed_listings() {
        let catalog = StaticCatalog::new(Vec::new());
        assert!(catalog.snapshot().await.unwrap().is_empty());
    }
}

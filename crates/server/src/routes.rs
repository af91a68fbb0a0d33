//! HTTP route handlers.
//!
//! Thin layer over the engine: resolve a catalog snapshot, delegate, map
//! the result to JSON. No business logic lives here.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use propbot_core::{ChatResponse, EngineError, Listing};
use propbot_engine::FilterQuery;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatParams {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub suggestion: String,
}

/// Raw query-string form of [`FilterQuery`]: list-valued fields arrive
/// comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PropertiesParams {
    pub locations: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub amenities: Option<String>,
    pub keyword: Option<String>,
}

impl PropertiesParams {
    fn into_query(self) -> FilterQuery {
        FilterQuery {
            locations: split_list(self.locations),
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_size: self.min_size,
            max_size: self.max_size,
            amenities: split_list(self.amenities),
            keyword: self.keyword.filter(|k| !k.trim().is_empty()),
        }
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// GET /api/chat?message=...
pub async fn chat(
    State(state): State<AppState>,
    Query(params): Query<ChatParams>,
) -> Result<Json<ChatResponse>, ApiError> {
    let listings = state.listings().await?;
    let response = state.engine.handle_message(&params.message, &listings)?;
    Ok(Json(response))
}

/// GET /api/suggestions?suggestion=...
pub async fn suggestion(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = state.listings().await?;
    let matched = state.engine.handle_suggestion(&params.suggestion, &listings)?;
    Ok(Json(matched))
}

/// GET /api/properties with optional structured filters.
pub async fn properties(
    State(state): State<AppState>,
    Query(params): Query<PropertiesParams>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = state.listings().await?;
    let query = params.into_query();
    if query.is_empty() {
        return Ok(Json(listings.as_ref().clone()));
    }
    Ok(Json(query.apply(&listings)))
}

/// GET /api/properties/{id}
pub async fn property_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Listing>, ApiError> {
    let listings = state.listings().await?;
    listings
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError(EngineError::ListingNotFound(id)))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

//! HTTP-level tests driving the router directly with `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use propbot_catalog::StaticCatalog;
use propbot_core::Listing;
use propbot_engine::ChatEngine;
use propbot_server::{app, AppState};

fn listing(id: u64, title: &str, location: &str, property_type: &str, price: f64) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        location: location.to_string(),
        price,
        bedrooms: 3,
        bathrooms: 2,
        size_sqft: 1_400.0,
        property_type: property_type.to_string(),
        amenities: vec!["Gym".to_string()],
        image: None,
    }
}

fn test_app() -> axum::Router {
    let catalog = vec![
        listing(1, "Modern Downtown Apartment", "New York, NY", "apartment", 450_000.0),
        listing(2, "Suburban Family House", "Dallas, TX", "house", 520_000.0),
    ];
    let state = AppState::new(ChatEngine::default(), Arc::new(StaticCatalog::new(catalog)));
    app(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn chat_greeting_returns_reply_and_no_properties() {
    let (status, body) = get_json(test_app(), "/api/chat?message=hi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Hi! How can I help you with your property search today?"
    );
    assert_eq!(body["properties"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn chat_search_returns_listings() {
    let (status, body) =
        get_json(test_app(), "/api/chat?message=apartments%20in%20New%20York").await;
    assert_eq!(status, StatusCode::OK);
    let properties = body["properties"].as_array().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["id"], 1);
    assert_eq!(properties[0]["type"], "apartment");
}

#[tokio::test]
async fn empty_chat_message_is_bad_request() {
    let (status, body) = get_json(test_app(), "/api/chat?message=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a property search query.");
}

#[tokio::test]
async fn unknown_suggestion_is_bad_request() {
    let (status, body) = get_json(test_app(), "/api/suggestions?suggestion=anything").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid suggestion. Only predefined suggestions are allowed."
    );
}

#[tokio::test]
async fn predefined_suggestion_filters_catalog() {
    let uri = "/api/suggestions?suggestion=Show%20me%20properties%20under%20%24500%2C000";
    let (status, body) = get_json(test_app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    let matched = body.as_array().unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["id"], 1);
}

#[tokio::test]
async fn properties_endpoint_without_filters_returns_all() {
    let (status, body) = get_json(test_app(), "/api/properties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn properties_endpoint_applies_structured_filters() {
    let (status, body) =
        get_json(test_app(), "/api/properties?locations=New%20York&max_price=500000").await;
    assert_eq!(status, StatusCode::OK);
    let matched = body.as_array().unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["id"], 1);
}

#[tokio::test]
async fn property_by_id_and_missing_id() {
    let (status, body) = get_json(test_app(), "/api/properties/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Suburban Family House");

    let (status, body) = get_json(test_app(), "/api/properties/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Property not found");
}

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fantasy_cricket::api::handlers::AppState;
use fantasy_cricket::api::routes::create_router;
use fantasy_cricket::config::settings::AppConfig;
use fantasy_cricket::dataset::DataSet;
use fantasy_cricket::services::seeding::SeedingService;
use fantasy_cricket::services::SqliteStore;

/// Router over an in-memory store seeded from the bundled `data/` directory
pub fn build_test_app() -> Router {
    let store = SqliteStore::in_memory().unwrap();
    let dataset = DataSet::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
    SeedingService::new(dataset).run(&store).unwrap();

    let state = Arc::new(AppState {
        store,
        config: AppConfig::default(),
    });
    create_router(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// 166.5 points against `data/match.json`
pub fn whistle_podu() -> Value {
    json!({
        "name": "Whistle Podu",
        "players": [
            "MS Dhoni", "RD Gaikwad", "DP Conway", "MM Ali", "M Theekshana", "Simarjeet Singh",
            "JC Buttler", "YBK Jaiswal", "R Ashwin", "TA Boult", "YS Chahal"
        ],
        "captain": "DP Conway",
        "viceCaptain": "Simarjeet Singh"
    })
}

/// 147 points against `data/match.json`
pub fn halla_bol() -> Value {
    json!({
        "name": "Halla Bol",
        "players": [
            "SV Samson", "JC Buttler", "YBK Jaiswal", "D Padikkal", "SO Hetmyer", "R Ashwin",
            "R Parag", "TA Boult", "YS Chahal", "M Prasidh Krishna", "PH Solanki"
        ],
        "captain": "PH Solanki",
        "viceCaptain": "YBK Jaiswal"
    })
}

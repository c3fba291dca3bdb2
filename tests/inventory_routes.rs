mod common;

use axum::http::StatusCode;
use common::{get_json, spawn_upstream, test_app};
use serde_json::json;

#[tokio::test]
async fn get_cars_seeds_an_empty_store_once() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream).await;

    let first = get_json(&app, "/djangoapp/get_cars").await;
    assert_eq!(first.status, StatusCode::OK);
    let body = first.json();
    let cars = body["CarModels"].as_array().expect("CarModels is not a list");
    assert_eq!(cars.len(), 15);
    assert_eq!(cars[0], json!({"CarModel": "Pathfinder", "CarMake": "NISSAN"}));
    assert!(cars.contains(&json!({"CarModel": "Kluger", "CarMake": "Toyota"})));

    let second = get_json(&app, "/djangoapp/get_cars").await;
    assert_eq!(second.json(), body);
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream).await;
    let resp = get_json(&app, "/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({"status": "ok"}));
}

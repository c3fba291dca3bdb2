#![allow(dead_code)]

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::Path,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dealership_hub::config::Config;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;
use url::Url;

/// Reviews containing this word make the sentiment stand-in fail.
pub const POISON_WORD: &str = "explode";

fn dealers() -> Value {
    json!([
        {"id": 1, "city": "El Paso", "state": "Texas", "full_name": "Holdlamis Car Dealership"},
        {"id": 2, "city": "Minneapolis", "state": "Minnesota", "full_name": "Temp Car Dealership"},
        {"id": 15, "city": "Topeka", "state": "Kansas", "full_name": "Sunflower Motors"}
    ])
}

fn reviews_for(dealer_id: u64) -> Value {
    match dealer_id {
        15 => json!([
            {"id": 1, "name": "Berkly Shepley", "dealership": 15,
             "review": "Great service and a fair price", "purchase": true,
             "car_make": "Audi", "car_model": "A6", "car_year": 2010},
            {"id": 2, "name": "Gwenora Zettoi", "dealership": 15,
             "review": "Bad experience, pushy sales", "purchase": false}
        ]),
        16 => json!([
            {"id": 3, "name": "Rey", "dealership": 16,
             "review": "The engine might explode", "purchase": true}
        ]),
        _ => json!([]),
    }
}

async fn fetch_dealers() -> Json<Value> {
    Json(dealers())
}

async fn fetch_dealers_by_state(Path(state): Path<String>) -> Response {
    let matching: Vec<Value> = dealers()
        .as_array()
        .into_iter()
        .flatten()
        .filter(|d| d["state"] == state.as_str())
        .cloned()
        .collect();
    if matching.is_empty() {
        let msg = format!("No dealers found in {state}");
        return (StatusCode::NOT_FOUND, Json(json!({"message": msg}))).into_response();
    }
    Json(Value::Array(matching)).into_response()
}

async fn fetch_dealer(Path(id): Path<u64>) -> Response {
    let found = dealers()
        .as_array()
        .into_iter()
        .flatten()
        .find(|d| d["id"] == id)
        .cloned();
    match found {
        Some(dealer) => Json(dealer).into_response(),
        None => {
            let msg = format!("Dealer with ID {id} not found");
            (StatusCode::NOT_FOUND, Json(json!({"message": msg}))).into_response()
        }
    }
}

async fn fetch_reviews(Path(id): Path<u64>) -> Json<Value> {
    Json(reviews_for(id))
}

async fn insert_review(Json(mut body): Json<Value>) -> Json<Value> {
    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".to_string(), json!(4));
    }
    Json(body)
}

async fn analyze(Path(text): Path<String>) -> Response {
    if text.contains(POISON_WORD) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let label = if text.to_lowercase().contains("bad") {
        "negative"
    } else {
        "positive"
    };
    Json(json!({ "sentiment": label })).into_response()
}

/// Serve the dealer and sentiment stand-ins on an ephemeral port.
pub async fn spawn_upstream() -> Url {
    let app = Router::new()
        .route("/fetchDealers", get(fetch_dealers))
        .route("/fetchDealers/{state}", get(fetch_dealers_by_state))
        .route("/fetchDealer/{id}", get(fetch_dealer))
        .route("/fetchReviews/dealer/{id}", get(fetch_reviews))
        .route("/insert_review", post(insert_review))
        .route("/analyze/{text}", get(analyze));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind upstream stand-in");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream stand-in crashed");
    });
    Url::parse(&format!("http://{addr}")).expect("invalid upstream url")
}

/// Router under test, backed by an in-memory database and the given upstream.
pub async fn test_app(upstream: &Url) -> Router {
    let cfg = Config {
        database_url: "sqlite::memory:".to_string(),
        backend_url: upstream.clone(),
        sentiment_analyzer_url: upstream.clone(),
        cookie_secret: Some("s".repeat(64)),
        request_timeout_secs: 5,
        ..Config::default()
    };
    let pool = dealership_hub::db::connect(&cfg.database_url)
        .await
        .expect("failed to open test database");
    let state = dealership_hub::HubState::new(&cfg, pool).expect("failed to build state");
    dealership_hub::hub_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body was not JSON")
    }

    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("dealer_session="))
            .map(str::to_owned)
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get_json(app: &Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, req).await
}

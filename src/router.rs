use axum::{
    Json, Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use serde_json::{Value, json};

use crate::api::{DealerApi, SentimentApi, build_http_client};
use crate::config::Config;
use crate::db::sqlite::{InventoryStorage, SqlitePool, UserStorage};
use crate::error::HubError;
use crate::handlers::{auth, dealers, inventory};
use crate::middleware::session::cookie_key;
use crate::service::AccountService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct HubState {
    pub accounts: AccountService,
    pub inventory: InventoryStorage,
    pub dealers: DealerApi,
    pub sentiment: SentimentApi,
    cookie_key: Key,
}

impl HubState {
    /// Build the state from configuration and an already-initialized pool.
    pub fn new(cfg: &Config, pool: SqlitePool) -> Result<Self, HubError> {
        let client = build_http_client(cfg)?;
        Ok(Self {
            accounts: AccountService::new(UserStorage::new(pool.clone())),
            inventory: InventoryStorage::new(pool),
            dealers: DealerApi::new(client.clone(), cfg.backend_url.clone()),
            sentiment: SentimentApi::new(client, cfg.sentiment_analyzer_url.clone()),
            cookie_key: cookie_key(cfg.cookie_secret.as_deref()),
        })
    }
}

impl FromRef<HubState> for Key {
    fn from_ref(state: &HubState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn hub_router(state: HubState) -> Router {
    let app = Router::new()
        .route("/login", post(auth::login_user))
        .route("/logout", get(auth::logout_request))
        .route("/register", post(auth::registration))
        .route("/get_cars", get(inventory::get_cars))
        .route("/get_dealers", get(dealers::get_dealerships))
        .route("/get_dealers/{state}", get(dealers::get_dealerships_by_state))
        .route("/dealer", get(dealers::get_dealer_details_without_id))
        .route("/dealer/{dealer_id}", get(dealers::get_dealer_details))
        .route(
            "/reviews/dealer",
            get(dealers::get_dealer_reviews_without_id),
        )
        .route(
            "/reviews/dealer/{dealer_id}",
            get(dealers::get_dealer_reviews),
        )
        .route("/add_review", post(dealers::add_review));

    Router::new()
        .route("/health", get(health))
        .nest("/djangoapp", app)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

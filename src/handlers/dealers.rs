use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::Value;

use crate::service::reviews::annotated_reviews;
use crate::types::Envelope;
use crate::types::envelope::{DealerPayload, DealersPayload, ReviewsPayload};
use crate::{HubError, router::HubState};

/// State name that selects every dealership.
const ALL_STATES: &str = "All";

/// GET /get_dealers
pub async fn get_dealerships(
    State(state): State<HubState>,
) -> Result<Json<Envelope<DealersPayload>>, HubError> {
    dealerships(&state, None).await
}

/// GET /get_dealers/{state}
pub async fn get_dealerships_by_state(
    State(state): State<HubState>,
    Path(us_state): Path<String>,
) -> Result<Json<Envelope<DealersPayload>>, HubError> {
    dealerships(&state, Some(us_state.as_str())).await
}

async fn dealerships(
    state: &HubState,
    us_state: Option<&str>,
) -> Result<Json<Envelope<DealersPayload>>, HubError> {
    let filter = us_state.filter(|s| *s != ALL_STATES);
    let dealers = state.dealers.fetch_dealers(filter).await?;
    Ok(Json(Envelope::ok(DealersPayload { dealers })))
}

/// GET /dealer/{dealer_id}
pub async fn get_dealer_details(
    State(state): State<HubState>,
    Path(dealer_id): Path<u64>,
) -> Result<Json<Envelope<DealerPayload>>, HubError> {
    dealer_details(&state, Some(dealer_id)).await
}

/// GET /dealer
pub async fn get_dealer_details_without_id(
    State(state): State<HubState>,
) -> Result<Json<Envelope<DealerPayload>>, HubError> {
    dealer_details(&state, None).await
}

async fn dealer_details(
    state: &HubState,
    dealer_id: Option<u64>,
) -> Result<Json<Envelope<DealerPayload>>, HubError> {
    let Some(dealer_id) = present_id(dealer_id) else {
        return Ok(Json(Envelope::not_found()));
    };
    let dealer = state.dealers.fetch_dealer(dealer_id).await?;
    Ok(Json(Envelope::ok(DealerPayload { dealer })))
}

/// GET /reviews/dealer/{dealer_id}
pub async fn get_dealer_reviews(
    State(state): State<HubState>,
    Path(dealer_id): Path<u64>,
) -> Result<Json<Envelope<ReviewsPayload>>, HubError> {
    dealer_reviews(&state, Some(dealer_id)).await
}

/// GET /reviews/dealer
pub async fn get_dealer_reviews_without_id(
    State(state): State<HubState>,
) -> Result<Json<Envelope<ReviewsPayload>>, HubError> {
    dealer_reviews(&state, None).await
}

async fn dealer_reviews(
    state: &HubState,
    dealer_id: Option<u64>,
) -> Result<Json<Envelope<ReviewsPayload>>, HubError> {
    let Some(dealer_id) = present_id(dealer_id) else {
        return Ok(Json(Envelope::not_found()));
    };
    let reviews = annotated_reviews(&state.dealers, &state.sentiment, dealer_id).await?;
    Ok(Json(Envelope::ok(ReviewsPayload { reviews })))
}

/// POST /add_review -> the dealer service's reply, verbatim.
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn add_review(
    State(state): State<HubState>,
    body: Bytes,
) -> Result<Json<Value>, HubError> {
    let review: Value = serde_json::from_slice(&body).map_err(HubError::InvalidBody)?;
    let result = state.dealers.post_review(&review).await?;
    Ok(Json(result))
}

/// Dealer ids start at 1; zero counts as "no id".
fn present_id(dealer_id: Option<u64>) -> Option<u64> {
    dealer_id.filter(|id| *id != 0)
}

use crate::api::{DealerApi, SentimentApi};
use crate::error::HubError;
use crate::types::Review;
use serde_json::Value;
use tracing::{info, warn};

/// Fetch a dealer's reviews and label each one with its sentiment.
///
/// The sentiment service is called once per review, in order. The first
/// failing call aborts the whole aggregation; no partially labelled list is
/// returned.
pub async fn annotated_reviews(
    dealers: &DealerApi,
    sentiment: &SentimentApi,
    dealer_id: u64,
) -> Result<Vec<Review>, HubError> {
    let payload = dealers.fetch_reviews(dealer_id).await?;
    let mut reviews = parse_reviews(payload)?;

    for review in reviews.iter_mut() {
        let label = sentiment
            .analyze(&review.review)
            .await
            .inspect_err(|e| warn!(dealer_id, error = %e, "sentiment analysis failed"))?;
        review.sentiment = Some(label.sentiment);
    }

    info!(dealer_id, count = reviews.len(), "reviews annotated");
    Ok(reviews)
}

fn parse_reviews(payload: Value) -> Result<Vec<Review>, HubError> {
    match payload {
        Value::Array(_) => Ok(serde_json::from_value(payload)?),
        other => Err(HubError::UnexpectedPayload(format!(
            "expected a list of reviews, got {other}"
        ))),
    }
}

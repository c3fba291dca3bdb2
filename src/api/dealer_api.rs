use crate::api::endpoint_url;
use crate::error::HubError;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Client for the dealer/review data service.
///
/// Payloads are forwarded as raw JSON; whatever the service answers, including
/// its own "not found" bodies, is what the caller gets back.
#[derive(Clone)]
pub struct DealerApi {
    client: reqwest::Client,
    base_url: Url,
}

impl DealerApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// GET `{base}/{segments...}` and decode the JSON body.
    pub async fn get_request<I, S>(&self, segments: I) -> Result<Value, HubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let url = endpoint_url(&self.base_url, segments)?;
        debug!(url = %url, "GET dealer service");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let payload: Value = resp.json().await?;
        debug!(status = %status, "dealer service replied");
        Ok(payload)
    }

    pub async fn fetch_dealers(&self, state: Option<&str>) -> Result<Value, HubError> {
        match state {
            Some(state) => self.get_request(["fetchDealers", state]).await,
            None => self.get_request(["fetchDealers"]).await,
        }
    }

    pub async fn fetch_dealer(&self, dealer_id: u64) -> Result<Value, HubError> {
        self.get_request(["fetchDealer".to_string(), dealer_id.to_string()])
            .await
    }

    pub async fn fetch_reviews(&self, dealer_id: u64) -> Result<Value, HubError> {
        self.get_request([
            "fetchReviews".to_string(),
            "dealer".to_string(),
            dealer_id.to_string(),
        ])
        .await
    }

    /// POST the submission body unmodified to `{base}/insert_review`.
    pub async fn post_review(&self, review: &Value) -> Result<Value, HubError> {
        let url = endpoint_url(&self.base_url, ["insert_review"])?;
        let resp = self.client.post(url).json(review).send().await?;
        let status = resp.status();
        let payload: Value = resp.json().await?;
        info!(status = %status, "review forwarded to dealer service");
        Ok(payload)
    }
}

use crate::api::endpoint_url;
use crate::error::HubError;
use serde::Deserialize;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
}

/// Client for the sentiment analysis service: one text in, one label out.
#[derive(Clone)]
pub struct SentimentApi {
    client: reqwest::Client,
    base_url: Url,
}

impl SentimentApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// GET `{base}/analyze/{text}`. Non-2xx replies are errors.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResponse, HubError> {
        let url = endpoint_url(&self.base_url, ["analyze", text])?;
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;
        let parsed: SentimentResponse = resp.json().await?;
        debug!(sentiment = %parsed.sentiment, "sentiment analyzed");
        Ok(parsed)
    }
}

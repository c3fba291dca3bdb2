//! Outbound HTTP clients for the external collaborators.

pub mod dealer_api;
pub mod sentiment_api;

pub use dealer_api::DealerApi;
pub use sentiment_api::SentimentApi;

use crate::config::Config;
use crate::error::HubError;
use std::time::Duration;
use url::Url;

/// Build the process-wide HTTP client shared by every upstream call.
pub fn build_http_client(cfg: &Config) -> Result<reqwest::Client, HubError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("dealership-hub/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .timeout(Duration::from_secs(cfg.request_timeout_secs));
    // Only the configured proxy applies; system proxy variables are ignored.
    builder = match cfg.proxy.as_ref() {
        Some(proxy_url) => builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?),
        None => builder.no_proxy(),
    };
    Ok(builder.build()?)
}

/// Append path segments to `base`, percent-encoding each one.
pub(crate) fn endpoint_url<I, S>(base: &Url, segments: I) -> Result<Url, HubError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_appended_to_base_path() {
        let base = Url::parse("http://dealers.local:3030/api/").unwrap();
        let url = endpoint_url(&base, ["fetchDealers", "Kansas"]).unwrap();
        assert_eq!(url.as_str(), "http://dealers.local:3030/api/fetchDealers/Kansas");
    }

    #[test]
    fn segments_are_percent_encoded() {
        let base = Url::parse("http://sentiment.local").unwrap();
        let url = endpoint_url(&base, ["analyze", "great car/fast service?"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://sentiment.local/analyze/great%20car%2Ffast%20service%3F"
        );
    }

    #[test]
    fn cannot_be_a_base_urls_are_rejected() {
        let base = Url::parse("mailto:dealer@example.com").unwrap();
        assert!(endpoint_url(&base, ["fetchDealers"]).is_err());
    }
}

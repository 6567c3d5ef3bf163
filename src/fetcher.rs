use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// GET `url` and decode the JSON body, bounded by the configured
    /// deadline. Expiry drops the in-flight request. No retry happens at
    /// this layer; that is the caller's call.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        self.get_json_with_timeout(url, self.timeout).await
    }

    /// Same as [`get_json`](Self::get_json) with a per-call deadline. The
    /// deadline covers the whole round-trip, body read included.
    pub async fn get_json_with_timeout<T: DeserializeOwned>(
        &self,
        url: Url,
        timeout: Duration,
    ) -> Result<T, FetchError> {
        let resp = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(%url, error = %err, "request failed");
                classify(&err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "non-success response");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        resp.json::<T>().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "reading response body failed");
            classify(&err)
        })
    }
}

fn classify(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Connectivity
    }
}

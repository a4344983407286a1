//! HTTP transport layer for IEX Cloud API requests

use iex_core::{Config, Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// HTTP transport layer for making requests to IEX Cloud
///
/// Requests are issued once. There is no retry: a transport failure, a
/// non-success status or an unparseable body is returned to the caller.
pub struct Transport {
    client: Client,
    base_url: String,
    api_token: String,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("iex-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://mock.iexapis.com/stable".to_string(),
            api_token: "test_token".to_string(),
        }
    }

    /// Make a GET request against `path` (relative to the base URL)
    ///
    /// # Arguments
    ///
    /// * `path` - Endpoint path, e.g. `/stock/market/batch`
    /// * `params` - Query parameters; the token is appended automatically
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the deserialized response or an error
    #[instrument(skip(self, params))]
    pub async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params)?;
        debug!("Making request to: {}", redact_token(&url));

        let response = self.make_request(url).await?;
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

        debug!("Response body length: {} bytes", text.len());

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                info!("Successfully parsed response for {}", path);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                error!("Response text (first 500 chars): {}", snippet(&text, 500));
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    snippet(&text, 200)
                )))
            }
        }
    }

    /// Build the full URL for an API request
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
            query_pairs.append_pair("token", &self.api_token);
        }

        Ok(url)
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: Url) -> Result<Response> {
        let logged_url = redact_token(&url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request to {} failed: {}", logged_url, e.without_url())))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            // IEX Cloud reports errors as a plain text body, e.g. "Unknown symbol"
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status: {}", status);
            Err(Error::Api(format!("{}: {}", status, snippet(body.trim(), 200))))
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .finish()
    }
}

/// Render a URL for logging with the token value masked
fn redact_token(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let transport = Transport::new_mock();
        let params = [("symbols", "AAPL,MSFT".to_string()), ("types", "quote".to_string())];

        let url = transport.build_url("/stock/market/batch", &params).unwrap();
        let url = url.to_string();

        assert!(url.starts_with("https://mock.iexapis.com/stable/stock/market/batch?"));
        assert!(url.contains("symbols=AAPL%2CMSFT"));
        assert!(url.contains("types=quote"));
        assert!(url.contains("token=test_token"));
    }

    #[test]
    fn test_redact_token() {
        let transport = Transport::new_mock();
        let url = transport.build_url("/stock/market/batch", &[("symbols", "AAPL".to_string())]).unwrap();

        let logged = redact_token(&url);
        assert!(!logged.contains("test_token"));
        assert!(logged.contains("token=***") || logged.contains("token=%2A%2A%2A"));
        assert!(logged.contains("symbols=AAPL"));
    }

    #[test]
    fn test_debug_hides_token() {
        let transport = Transport::new_mock();
        let debug_str = format!("{:?}", transport);
        assert!(!debug_str.contains("test_token"));
        assert!(debug_str.contains("mock.iexapis.com"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::default_with_key("k".to_string()).with_base_url("http://localhost:1/stable/");
        let transport = Transport::new(&config).unwrap();
        let url = transport.build_url("/stock/market/batch", &[]).unwrap();
        assert!(url.as_str().starts_with("http://localhost:1/stable/stock/market/batch?"));
    }

    #[test]
    fn test_snippet() {
        assert_eq!(snippet("abcdef", 3), "abc");
        assert_eq!(snippet("ab", 10), "ab");
    }
}

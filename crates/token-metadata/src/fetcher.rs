use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, FetchError};
use crate::token::TokenInfo;

/// Trait for token list transports (HTTP, fixtures, etc.).
#[async_trait]
pub trait TokenListFetcher: Send + Sync {
    /// Retrieve the raw body served at `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Deserialize)]
struct TokenListBody {
    tokens: Vec<TokenInfo>,
}

/// Extract the `tokens` array from a token list document.
pub fn parse_token_list(body: &str) -> Result<Vec<TokenInfo>, Error> {
    let list: TokenListBody =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    Ok(list.tokens)
}

/// HTTP token list fetcher backed by `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTokenListFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpTokenListFetcher {
    pub fn new(timeout: std::time::Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &crate::config::AggregatorConfig) -> Result<Self, Error> {
        Self::new(config.request_timeout())
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl TokenListFetcher for HttpTokenListFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        };

        tracing::debug!(url, "fetching token list");
        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "token list request failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

/// In-memory fetcher for testing. Unknown URLs answer with status 404.
#[derive(Debug, Default)]
pub struct StaticTokenListFetcher {
    responses: HashMap<String, Result<String, u16>>,
    requests: AtomicUsize,
}

impl StaticTokenListFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn insert(&mut self, url: &str, body: impl Into<String>) {
        self.responses.insert(url.to_string(), Ok(body.into()));
    }

    /// Answer `url` with a non-success status.
    pub fn insert_status(&mut self, url: &str, status: u16) {
        self.responses.insert(url.to_string(), Err(status));
    }

    /// Number of fetches attempted so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenListFetcher for StaticTokenListFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_list() {
        let tokens = parse_token_list(
            r#"{
                "name": "Trust Wallet: Ethereum",
                "tokens": [
                    { "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "logoURI": "u1", "symbol": "A" },
                    { "address": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].logo_uri.as_deref(), Some("u1"));
        assert!(tokens[1].logo_uri.is_none());
    }

    #[test]
    fn test_parse_token_list_malformed() {
        for body in ["<html>not found</html>", r#"{ "name": "x" }"#, r#"{ "tokens": 3 }"#] {
            assert!(
                matches!(parse_token_list(body), Err(Error::MalformedResponse(_))),
                "accepted {body}"
            );
        }
    }

    #[tokio::test]
    async fn test_static_fetcher() {
        let mut fetcher = StaticTokenListFetcher::new();
        fetcher.insert("https://a", "{}");
        fetcher.insert_status("https://b", 500);

        assert_eq!(fetcher.fetch("https://a").await.unwrap(), "{}");
        assert!(matches!(
            fetcher.fetch("https://b").await,
            Err(FetchError::Status { status: 500, .. })
        ));
        assert!(matches!(
            fetcher.fetch("https://c").await,
            Err(FetchError::Status { status: 404, .. })
        ));
        assert_eq!(fetcher.request_count(), 3);
    }
}

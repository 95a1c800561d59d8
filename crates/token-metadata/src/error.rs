use thiserror::Error;

use crate::network::Network;

/// Unified error type for metadata aggregation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no asset repository slug registered for network '{0}'")]
    UnsupportedNetwork(Network),

    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    #[error("remote fetch error: {0}")]
    RemoteFetch(#[from] FetchError),

    #[error("malformed token list response: {0}")]
    MalformedResponse(String),

    #[error("local asset directory '{path}' unavailable: {reason}")]
    LocalAssetDirUnavailable { path: String, reason: String },

    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("config error: {0}")]
    Config(String),
}

/// Errors while retrieving a remote token list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
}

impl Error {
    pub(crate) fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Error::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}

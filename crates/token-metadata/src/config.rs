//! Aggregator configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::equivalence::AddressEquivalence;
use crate::error::Error;
use crate::network::{Network, NetworkSlugs};

pub const DEFAULT_TOKENLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains";
pub const DEFAULT_LOGO_BASE_URL: &str =
    "https://raw.githubusercontent.com/balancer-labs/assets/master/assets";
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Sources and static tables used by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorConfig {
    /// Base of the remote token lists; `/{slug}/tokenlist.json` is appended.
    pub tokenlist_base_url: String,

    /// Base of the published logo URLs for local assets.
    pub logo_base_url: String,

    /// Directory holding `{address}.png` images.
    pub asset_dir: PathBuf,

    pub request_timeout_ms: u64,

    pub network_slugs: NetworkSlugs,

    pub address_equivalence: AddressEquivalence,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            tokenlist_base_url: DEFAULT_TOKENLIST_BASE_URL.to_string(),
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            network_slugs: NetworkSlugs::default(),
            address_equivalence: AddressEquivalence::default(),
        }
    }
}

impl AggregatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Token list URL for a network.
    pub fn tokenlist_url(&self, network: Network) -> Result<String, Error> {
        let slug = self.network_slugs.resolve(network)?;
        Ok(format!(
            "{}/{}/tokenlist.json",
            self.tokenlist_base_url.trim_end_matches('/'),
            slug
        ))
    }
}

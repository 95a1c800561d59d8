pub mod address;
pub mod aggregator;
pub mod config;
pub mod equivalence;
pub mod error;
pub mod fetcher;
pub mod local_assets;
pub mod network;
pub mod token;

#[cfg(feature = "http")]
use std::collections::BTreeMap;

// Re-exports for convenience
pub use address::checksum_address;
pub use aggregator::{AssetInventory, MetadataAggregator};
pub use config::AggregatorConfig;
pub use equivalence::{mainnet_address, AddressEquivalence};
pub use error::{Error, FetchError};
pub use fetcher::TokenListFetcher;
#[cfg(feature = "http")]
pub use fetcher::HttpTokenListFetcher;
pub use network::{Network, NetworkSlugs};
pub use token::{LocalAssetEntry, MetadataOverride, SourcedToken, TokenInfo, TokenOrigin};

/// Aggregate token metadata for `network` with the default configuration.
///
/// Fetches the Trust Wallet token list over HTTP, reads `./assets` and
/// merges `known_token_info` on top.
#[cfg(feature = "http")]
pub async fn aggregate_metadata(
    network: Network,
    known_token_info: Option<&[TokenInfo]>,
) -> Result<BTreeMap<String, MetadataOverride>, Error> {
    let config = AggregatorConfig::default();
    let fetcher = HttpTokenListFetcher::from_config(&config)?;
    MetadataAggregator::new(config, fetcher)
        .aggregate(network, known_token_info)
        .await
}

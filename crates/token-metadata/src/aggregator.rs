use std::collections::BTreeMap;

use crate::address::checksum_address;
use crate::config::AggregatorConfig;
use crate::error::Error;
use crate::fetcher::{parse_token_list, TokenListFetcher};
use crate::local_assets::list_local_assets;
use crate::network::Network;
use crate::token::{LocalAssetEntry, MetadataOverride, SourcedToken, TokenInfo, TokenOrigin};

/// Token addresses available from each source for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInventory {
    pub local: Vec<String>,
    pub trust_wallet: Vec<String>,
}

/// Merges a remote token list, local asset images and caller-supplied
/// entries into one mapping keyed by checksummed address.
pub struct MetadataAggregator<F> {
    config: AggregatorConfig,
    fetcher: F,
}

impl<F: TokenListFetcher> MetadataAggregator<F> {
    pub fn new(config: AggregatorConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the remote token list for `network`.
    pub async fn remote_tokens(&self, network: Network) -> Result<Vec<TokenInfo>, Error> {
        let url = self.config.tokenlist_url(network)?;
        let body = self.fetcher.fetch(&url).await?;
        let tokens = parse_token_list(&body)?;
        tracing::debug!(%network, url = %url, count = tokens.len(), "remote token list loaded");
        Ok(tokens)
    }

    /// Image-backed entries from the configured asset directory.
    pub async fn local_assets(&self) -> Result<Vec<LocalAssetEntry>, Error> {
        let entries = list_local_assets(&self.config.asset_dir).await?;
        tracing::debug!(
            dir = %self.config.asset_dir.display(),
            count = entries.len(),
            "local assets listed"
        );
        Ok(entries)
    }

    /// All source entries in merge order: remote, local assets, known.
    ///
    /// The remote list is fetched before the asset directory is read, so a
    /// fetch failure leaves the filesystem untouched.
    pub async fn collect(
        &self,
        network: Network,
        known_token_info: Option<&[TokenInfo]>,
    ) -> Result<Vec<SourcedToken>, Error> {
        let remote = self.remote_tokens(network).await?;
        let local = self.local_assets().await?;
        let known = known_token_info.unwrap_or_default();

        let mut sourced = Vec::with_capacity(remote.len() + local.len() + known.len());
        sourced.extend(remote.into_iter().map(|info| SourcedToken {
            origin: TokenOrigin::Remote,
            info,
        }));
        sourced.extend(local.into_iter().map(|entry| SourcedToken {
            origin: TokenOrigin::LocalAsset,
            info: entry.into_token_info(&self.config.logo_base_url),
        }));
        sourced.extend(known.iter().cloned().map(|info| SourcedToken {
            origin: TokenOrigin::Known,
            info,
        }));
        Ok(sourced)
    }

    /// Build the checksummed address → metadata mapping for `network`.
    ///
    /// Later sources replace earlier entries wholesale.
    pub async fn aggregate(
        &self,
        network: Network,
        known_token_info: Option<&[TokenInfo]>,
    ) -> Result<BTreeMap<String, MetadataOverride>, Error> {
        let sourced = self.collect(network, known_token_info).await?;
        let merged = merge_by_address(sourced)?;
        tracing::info!(%network, tokens = merged.len(), "aggregated token metadata");
        Ok(merged)
    }

    /// Addresses present in the local asset directory and the remote list.
    pub async fn inventory(&self, network: Network) -> Result<AssetInventory, Error> {
        let trust_wallet = self
            .remote_tokens(network)
            .await?
            .into_iter()
            .map(|t| t.address)
            .collect();
        let local = self
            .local_assets()
            .await?
            .into_iter()
            .map(|e| e.address)
            .collect();
        Ok(AssetInventory {
            local,
            trust_wallet,
        })
    }
}

/// Fold entries into a mapping keyed by checksummed address.
pub fn merge_by_address(
    tokens: impl IntoIterator<Item = SourcedToken>,
) -> Result<BTreeMap<String, MetadataOverride>, Error> {
    let mut merged = BTreeMap::new();
    for token in tokens {
        let key = checksum_address(&token.info.address)?;
        if let Some(previous) = merged.insert(key, token.info) {
            tracing::trace!(
                address = %previous.address,
                origin = ?token.origin,
                "replaced earlier entry"
            );
        }
    }
    Ok(merged)
}

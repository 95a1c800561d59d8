use serde::{Deserialize, Serialize};

/// Token list entry.
///
/// Only `address` and `logoURI` are interpreted; every other field is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,

    #[serde(rename = "logoURI")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenInfo {
    pub fn new(address: impl Into<String>, logo_uri: Option<String>) -> Self {
        Self {
            address: address.into(),
            logo_uri,
            extra: serde_json::Map::new(),
        }
    }
}

/// Value type of the aggregated mapping.
pub type MetadataOverride = TokenInfo;

/// A token image found in the local asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAssetEntry {
    pub file_name: String,
    pub address: String,
}

impl LocalAssetEntry {
    /// Interpret `{address}.png` as an asset entry.
    ///
    /// The address is everything before the first `.png`. Returns `None`
    /// for names without a `.png` suffix or with an empty address.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if !file_name.ends_with(".png") {
            return None;
        }
        let address = file_name.split(".png").next().unwrap_or_default();
        if address.is_empty() {
            return None;
        }
        Some(Self {
            file_name: file_name.to_string(),
            address: address.to_string(),
        })
    }

    /// Published logo location for this asset.
    pub fn logo_uri(&self, logo_base_url: &str) -> String {
        format!(
            "{}/{}.png",
            logo_base_url.trim_end_matches('/'),
            self.address.to_lowercase()
        )
    }

    pub fn into_token_info(self, logo_base_url: &str) -> TokenInfo {
        let logo_uri = self.logo_uri(logo_base_url);
        TokenInfo::new(self.address, Some(logo_uri))
    }
}

/// Where an aggregated entry came from, in increasing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TokenOrigin {
    Remote,
    LocalAsset,
    Known,
}

/// A token entry tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedToken {
    pub origin: TokenOrigin,
    pub info: TokenInfo,
}

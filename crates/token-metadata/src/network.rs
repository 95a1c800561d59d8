use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Networks with a known token asset repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Homestead,
    Kovan,
    Polygon,
    Arbitrum,
    BscTestnet,
    Bsc,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Homestead,
        Network::Kovan,
        Network::Polygon,
        Network::Arbitrum,
        Network::BscTestnet,
        Network::Bsc,
    ];

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Homestead => 1,
            Network::Kovan => 42,
            Network::Polygon => 137,
            Network::Arbitrum => 42161,
            Network::BscTestnet => 97,
            Network::Bsc => 56,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Homestead => "homestead",
            Network::Kovan => "kovan",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
            Network::BscTestnet => "bsc-testnet",
            Network::Bsc => "bsc",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "homestead" | "mainnet" => Ok(Network::Homestead),
            "kovan" => Ok(Network::Kovan),
            "polygon" => Ok(Network::Polygon),
            "arbitrum" => Ok(Network::Arbitrum),
            "bsc-testnet" | "bsctestnet" => Ok(Network::BscTestnet),
            "bsc" => Ok(Network::Bsc),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

/// Network → asset repository slug table.
///
/// The slug selects the `blockchains/{slug}` directory of the remote asset
/// repository. Several networks may share one slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkSlugs {
    slugs: HashMap<Network, String>,
}

impl NetworkSlugs {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            slugs: HashMap::new(),
        }
    }

    /// Add or override a slug.
    pub fn insert(&mut self, network: Network, slug: impl Into<String>) {
        self.slugs.insert(network, slug.into());
    }

    /// Resolve the slug for a network. Empty slugs count as unregistered.
    pub fn resolve(&self, network: Network) -> Result<&str, Error> {
        self.slugs
            .get(&network)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(Error::UnsupportedNetwork(network))
    }
}

impl Default for NetworkSlugs {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert(Network::Homestead, "ethereum");
        table.insert(Network::Kovan, "ethereum");
        table.insert(Network::Polygon, "polygon");
        table.insert(Network::Arbitrum, "ethereum");
        table.insert(Network::BscTestnet, "smartchain");
        table.insert(Network::Bsc, "smartchain");
        table
    }
}

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Known non-canonical token addresses and their mainnet counterparts.
///
/// Lookups are exact string matches; keys are not case-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressEquivalence {
    entries: HashMap<String, String>,
}

/// Mainnet aliases followed by BSC testnet bridge addresses.
const DEFAULT_EQUIVALENCES: &[(&str, &str)] = &[
    ("0xdFCeA9088c8A88A76FF74892C1457C17dfeef9C1", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    ("0x41286Bb1D3E870f3F750eB7E1C25d7E48c8A1Ac7", "0xba100000625a3754423978a60c9317c58a424e3D"),
    ("0xc2569dd7d0fd715B054fBf16E75B001E5c0C1115", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
    ("0xAf9ac3235be96eD496db7969f60D354fe5e426B0", "0x9f8F72aA9304c8B593d555F12eF6589cC3A579A2"),
    ("0x04DF6e4121c27713ED22341E7c7Df330F56f289B", "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
    ("0x8F4beBF498cc624a0797Fe64114A6Ff169EEe078", "0xbC396689893D065F41bc2C6EcbeE5e0085233447"),
    ("0x1C8E3Bcb3378a443CC591f154c5CE0EBb4dA9648", "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599"),
    // BSC testnet
    ("0x8301f2213c0eed49a7e28ae4c3e91722919b8b47", "0xe9e7CEA3DedcA5984780Bafc599bD69ADd087D56"),
    ("0x094616f0bdfb0b526bd735bf66eca0ad254ca81f", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
    ("0xec5dcb5dbf4b114c9d0f65bccab49ec54f6a0867", "0x1AF3F329e8BE154074D8769D1FFa4eE058B1DBc3"),
    ("0x0897202ce1838d0712d357103aae83650a0d426d", "0x55d398326f99059fF775485246999027B3197955"),
];

impl AddressEquivalence {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from `(non_canonical, canonical)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Map an address to its canonical counterpart, or return it verbatim.
    pub fn normalize_to_canonical(&self, address: &str) -> String {
        self.entries
            .get(address)
            .cloned()
            .unwrap_or_else(|| address.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn canonical_addresses(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|s| s.as_str())
    }
}

impl Default for AddressEquivalence {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_EQUIVALENCES.iter().copied())
    }
}

fn default_table() -> &'static AddressEquivalence {
    static TABLE: OnceLock<AddressEquivalence> = OnceLock::new();
    TABLE.get_or_init(AddressEquivalence::default)
}

/// Mainnet counterpart of `address` according to the built-in table.
pub fn mainnet_address(address: &str) -> String {
    default_table().normalize_to_canonical(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_aliases() {
        assert_eq!(
            mainnet_address("0xdFCeA9088c8A88A76FF74892C1457C17dfeef9C1"),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
        assert_eq!(
            mainnet_address("0x0897202ce1838d0712d357103aae83650a0d426d"),
            "0x55d398326f99059fF775485246999027B3197955"
        );
        assert_eq!(default_table().len(), 11);
    }

    #[test]
    fn test_pass_through() {
        // canonical address, random string, case-differing key
        for input in [
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "not an address",
            "",
            "0xdfcea9088c8a88a76ff74892c1457c17dfeef9c1",
            "0x8301F2213C0EED49A7E28AE4C3E91722919B8B47",
        ] {
            assert_eq!(mainnet_address(input), input);
        }
    }

    #[test]
    fn test_idempotent_on_canonical_values() {
        let table = AddressEquivalence::default();
        for canonical in table.canonical_addresses() {
            let once = table.normalize_to_canonical(canonical);
            assert_eq!(table.normalize_to_canonical(&once), once);
        }
        for (alias, _) in DEFAULT_EQUIVALENCES {
            let once = table.normalize_to_canonical(alias);
            assert_eq!(table.normalize_to_canonical(&once), once);
        }
    }

    #[test]
    fn test_injected_table() {
        let table = AddressEquivalence::from_pairs([("0xaaa", "0xbbb")]);
        assert_eq!(table.normalize_to_canonical("0xaaa"), "0xbbb");
        assert_eq!(
            table.normalize_to_canonical("0xdFCeA9088c8A88A76FF74892C1457C17dfeef9C1"),
            "0xdFCeA9088c8A88A76FF74892C1457C17dfeef9C1"
        );
        assert!(AddressEquivalence::empty().is_empty());
    }

    #[test]
    fn test_table_from_json() {
        let table: AddressEquivalence =
            serde_json::from_str(r#"{ "0xaaa": "0xbbb" }"#).unwrap();
        assert_eq!(table.normalize_to_canonical("0xaaa"), "0xbbb");
    }
}

//! Network identifiers and block explorer links.

use std::fmt;

/// Network used when none is given, and the only network transfers target.
pub const BASE_SEPOLIA: &str = "base-sepolia";

/// Default faucet token.
pub const DEFAULT_TOKEN: &str = "eth";

/// A wallet-service network identifier such as `base-sepolia`.
///
/// The value is passed through to the service untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network(String);

impl Network {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn base_sepolia() -> Self {
        Self::new(BASE_SEPOLIA)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Explorer host used for transaction links.
    ///
    /// Only `base-sepolia` maps to Basescan; every other network is linked to
    /// Etherscan regardless of the chain it actually lives on.
    #[must_use]
    pub fn scanner(&self) -> &'static str {
        if self.0 == BASE_SEPOLIA {
            "basescan.org"
        } else {
            "etherscan.io"
        }
    }

    /// Testnet explorer URL for a transaction hash.
    #[must_use]
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("https://sepolia.{}/tx/{tx_hash}", self.scanner())
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::base_sepolia()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Network {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Network {
    fn from(id: String) -> Self {
        Self(id)
    }
}

//! Accounts held by the wallet service.

use std::fmt;

/// An externally-owned account whose key is custodied by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// 0x-prefixed EVM address.
    pub address: String,
    /// Optional human-readable name assigned at creation.
    pub name: Option<String>,
}

impl Account {
    #[must_use]
    pub fn new(address: impl Into<String>, name: Option<String>) -> Self {
        Self {
            address: address.into(),
            name,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({name})", self.address),
            None => f.write_str(&self.address),
        }
    }
}

/// A contract wallet authorised by one or more owner accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartAccount {
    /// 0x-prefixed contract address.
    pub address: String,
    /// Addresses of the owner accounts.
    pub owners: Vec<String>,
    /// Optional human-readable name.
    pub name: Option<String>,
}

impl SmartAccount {
    /// Comma-separated owner list for log lines.
    #[must_use]
    pub fn owners_display(&self) -> String {
        format!("[{}]", self.owners.join(", "))
    }
}

impl fmt::Display for SmartAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmartAccount({})", self.address)
    }
}

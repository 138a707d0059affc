//! User operations submitted on behalf of smart accounts.

use std::fmt;

use alloy_primitives::U256;
use serde::Deserialize;

/// Lifecycle status reported by the wallet service for a user operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserOperationStatus {
    Pending,
    Signed,
    Broadcast,
    Complete,
    Dropped,
    Failed,
    /// Any status this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl UserOperationStatus {
    /// True once the service will no longer change the status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed | Self::Dropped)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Signed => "signed",
            Self::Broadcast => "broadcast",
            Self::Complete => "complete",
            Self::Dropped => "dropped",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UserOperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call executed by a smart account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    /// Destination address.
    pub to: String,
    /// Hex-encoded call data, `0x` for a plain value transfer.
    pub data: String,
    /// Native value in wei.
    pub value: U256,
}

impl EncodedCall {
    /// A call that only moves native value.
    #[must_use]
    pub fn transfer(to: impl Into<String>, value: U256) -> Self {
        Self {
            to: to.into(),
            data: "0x".to_string(),
            value,
        }
    }
}

/// A user operation as last reported by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOperation {
    pub user_op_hash: String,
    pub network: String,
    pub calls: Vec<EncodedCall>,
    pub status: UserOperationStatus,
    /// Present once the operation was included on chain.
    pub transaction_hash: Option<String>,
}

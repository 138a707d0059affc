//! Wallet service port.
//!
//! Defines the capability set this crate consumes from the remote custodial
//! wallet service. Key custody, signing and relaying all happen behind this
//! boundary; callers only sequence the calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, EncodedCall, Network, SmartAccount, UserOperation};
use crate::error::Result;

/// Client handle for the remote wallet service.
///
/// A handle is obtained from a [`WalletConnector`] for the duration of one
/// operation and released with [`close`](Self::close) before the operation
/// returns.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Every method returns an error for transport failures, authentication
/// failures and errors reported by the service.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// Create a new externally-owned account, optionally tagged with a name.
    async fn create_account(&self, name: Option<&str>) -> Result<Account>;

    /// Fetch an existing account by address.
    async fn get_account(&self, address: &str) -> Result<Account>;

    /// Create a smart account owned by `owner`.
    async fn create_smart_account(&self, owner: &Account) -> Result<SmartAccount>;

    /// Fetch an existing smart account and associate it with `owner`.
    async fn get_smart_account(&self, address: &str, owner: &Account) -> Result<SmartAccount>;

    /// Submit a user operation executing `calls` from `smart_account`.
    ///
    /// `owner` is the account that authorises the operation.
    async fn send_user_operation(
        &self,
        smart_account: &SmartAccount,
        owner: &Account,
        network: &Network,
        calls: Vec<EncodedCall>,
    ) -> Result<UserOperation>;

    /// Block until the user operation reaches a terminal status.
    async fn wait_for_user_operation(
        &self,
        smart_account_address: &str,
        user_op_hash: &str,
    ) -> Result<UserOperation>;

    /// Request testnet funds and return the faucet transaction hash.
    async fn request_faucet(&self, address: &str, network: &Network, token: &str)
        -> Result<String>;

    /// Release the handle. Called exactly once per acquired handle.
    async fn close(&self);
}

/// Acquires [`WalletApi`] handles.
///
/// Credentials are resolved here, so a misconfigured environment surfaces
/// as a failure of the operation that tried to connect.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Open a new client handle.
    async fn connect(&self) -> Result<Arc<dyn WalletApi>>;
}

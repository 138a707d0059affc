//! Faucet funding use case.

use std::fmt;

use tracing::{debug, info};

use super::account::{new_smart_wallet, OwnerSource};
use super::{report, session};
use crate::domain::Network;
use crate::error::Result;
use crate::port::WalletConnector;

/// Which address receives faucet funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingTarget<'a> {
    /// Create a smart account (and its owner EOA) and fund that.
    NewSmartAccount,
    /// Fund an address the caller already holds.
    Address(&'a str),
}

impl<'a> From<Option<&'a str>> for FundingTarget<'a> {
    fn from(address: Option<&'a str>) -> Self {
        address.map_or(Self::NewSmartAccount, Self::Address)
    }
}

/// Result of a faucet request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaucetReceipt {
    /// Address that received the funds.
    pub address: String,
    pub network: Network,
    pub token: String,
    /// Faucet transaction hash.
    pub transaction_hash: String,
    /// Block explorer link for the transaction.
    pub explorer_url: String,
}

impl fmt::Display for FaucetReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} faucet on {}: {}",
            self.token, self.network, self.explorer_url
        )
    }
}

/// Request faucet funds for `address`, creating a smart account first when
/// no address is given.
///
/// The faucet transaction is not awaited.
///
/// # Errors
///
/// Returns an error if account creation or the faucet request fails.
pub async fn fund_wallet(
    connector: &dyn WalletConnector,
    address: Option<&str>,
    network: &Network,
    token: &str,
) -> Result<FaucetReceipt> {
    debug!("Running fund_wallet");
    let target = FundingTarget::from(address);

    let outcome = session::scoped(connector, move |client| async move {
        let address = match target {
            FundingTarget::Address(address) => address.to_string(),
            FundingTarget::NewSmartAccount => {
                let smart_account = new_smart_wallet(connector, OwnerSource::Create).await?;
                info!(address = %smart_account.address, "Funding new smart account");
                smart_account.address
            }
        };

        let transaction_hash = client.request_faucet(&address, network, token).await?;
        let explorer_url = network.explorer_tx_url(&transaction_hash);
        let receipt = FaucetReceipt {
            address,
            network: network.clone(),
            token: token.to_string(),
            transaction_hash,
            explorer_url,
        };
        info!(
            token,
            network = %network,
            url = %receipt.explorer_url,
            "Requested funds from {receipt}"
        );

        Ok(receipt)
    })
    .await;

    report("fund_wallet", outcome)
}

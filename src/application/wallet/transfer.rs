//! Native value transfer from a smart account.

use tracing::{debug, error, info};

use super::{report, session};
use crate::domain::{ether_to_wei, EncodedCall, Network, UserOperationStatus};
use crate::error::Result;
use crate::port::WalletConnector;

/// Parameters of a smart-account transfer.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'a> {
    /// Smart account that sends the value.
    pub from_smart_address: &'a str,
    /// Owner account that authorises the user operation.
    pub from_smart_owner: &'a str,
    /// Destination address.
    pub to_address: &'a str,
    /// Ether amount as a decimal string.
    pub amount: &'a str,
}

/// Terminal outcome of a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferReceipt {
    /// The user operation completed on chain.
    Confirmed {
        user_op_hash: String,
        transaction_hash: Option<String>,
    },
    /// The user operation ended in any other terminal status.
    NotConfirmed {
        user_op_hash: String,
        status: UserOperationStatus,
    },
}

impl TransferReceipt {
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Transfer native ETH on Base Sepolia from a smart account.
///
/// Submits a single user operation and waits once for it to settle. Nothing
/// is retried.
///
/// # Errors
///
/// Returns an error if the amount is invalid, either account cannot be
/// resolved, or submitting or waiting for the user operation fails. A user
/// operation that settles with a non-`complete` status is not an error; it
/// yields [`TransferReceipt::NotConfirmed`].
pub async fn transfer_base_eth(
    connector: &dyn WalletConnector,
    request: TransferRequest<'_>,
) -> Result<TransferReceipt> {
    debug!("Running transfer_base_eth");
    report("transfer_base_eth", transfer(connector, request).await)
}

async fn transfer(
    connector: &dyn WalletConnector,
    request: TransferRequest<'_>,
) -> Result<TransferReceipt> {
    let value = ether_to_wei(request.amount)?;
    let network = Network::base_sepolia();

    session::scoped(connector, move |client| async move {
        let owner = client.get_account(request.from_smart_owner).await?;
        let smart_account = client
            .get_smart_account(request.from_smart_address, &owner)
            .await?;
        info!(
            smart_account = %smart_account,
            owners = %smart_account.owners_display(),
            "Obtained smart account"
        );

        let calls = vec![EncodedCall::transfer(request.to_address, value)];
        let submitted = client
            .send_user_operation(&smart_account, &owner, &network, calls)
            .await?;
        info!(
            user_op_hash = %submitted.user_op_hash,
            status = %submitted.status,
            "User operation submitted"
        );

        debug!("Waiting for user operation to be confirmed...");
        let settled = client
            .wait_for_user_operation(&smart_account.address, &submitted.user_op_hash)
            .await?;

        if settled.status == UserOperationStatus::Complete {
            info!(
                transaction_hash = settled.transaction_hash.as_deref().unwrap_or("none"),
                "User operation confirmed"
            );
            Ok(TransferReceipt::Confirmed {
                user_op_hash: settled.user_op_hash,
                transaction_hash: settled.transaction_hash,
            })
        } else {
            error!(status = %settled.status, "User operation failed");
            Ok(TransferReceipt::NotConfirmed {
                user_op_hash: settled.user_op_hash,
                status: settled.status,
            })
        }
    })
    .await
}

//! Wallet use cases.
//!
//! Each operation acquires its own wallet client through [`session::scoped`],
//! runs one call sequence and releases the client. Failures are logged here,
//! at the operation boundary, and handed back to the caller as `Err` so the
//! command layer can decide what they mean for the process.
//!
//! - [`create_eoa_wallet`] - new externally-owned account
//! - [`create_smart_wallet`] - new smart account, minting an owner if needed
//! - [`fund_wallet`] - faucet funding, minting a smart account if needed
//! - [`transfer_base_eth`] - native value transfer via a user operation

pub mod account;
pub mod funding;
pub mod session;
pub mod transfer;

use tracing::error;

use crate::error::Result;

pub use account::{create_eoa_wallet, create_smart_wallet, OwnerSource};
pub use funding::{fund_wallet, FaucetReceipt, FundingTarget};
pub use transfer::{transfer_base_eth, TransferReceipt, TransferRequest};

/// Log a failed operation and pass the result through.
fn report<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        error!(operation, error = %e, detail = ?e, "Wallet operation failed");
    }
    result
}

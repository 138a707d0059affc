//! Account creation use cases.

use tracing::{debug, info};

use super::{report, session};
use crate::domain::{Account, SmartAccount};
use crate::error::Result;
use crate::port::{WalletApi, WalletConnector};

/// Where the owner of a new smart account comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerSource<'a> {
    /// Mint a fresh, unnamed EOA.
    Create,
    /// Use the account already held at this address.
    Existing(&'a str),
}

impl<'a> From<Option<&'a str>> for OwnerSource<'a> {
    fn from(owner_address: Option<&'a str>) -> Self {
        owner_address.map_or(Self::Create, Self::Existing)
    }
}

/// Create an externally-owned account, optionally tagged with `name`.
///
/// # Errors
///
/// Returns an error if the client cannot be acquired or the service rejects
/// the request. The error is logged before it is returned.
pub async fn create_eoa_wallet(
    connector: &dyn WalletConnector,
    name: Option<&str>,
) -> Result<Account> {
    debug!("Running create_eoa_wallet");
    report("create_eoa_wallet", new_eoa(connector, name).await)
}

/// Create a smart account owned by `owner_address`, or by a new EOA when no
/// owner is given.
///
/// # Errors
///
/// Returns an error if any step of the owner resolution or the smart account
/// creation fails. An owner EOA created before the failure is not removed.
pub async fn create_smart_wallet(
    connector: &dyn WalletConnector,
    owner_address: Option<&str>,
) -> Result<SmartAccount> {
    debug!("Running create_smart_wallet");
    report(
        "create_smart_wallet",
        new_smart_wallet(connector, OwnerSource::from(owner_address)).await,
    )
}

pub(crate) async fn new_eoa(
    connector: &dyn WalletConnector,
    name: Option<&str>,
) -> Result<Account> {
    session::scoped(connector, move |client| async move {
        let account = client.create_account(name).await?;
        info!(
            address = %account.address,
            name = name.unwrap_or("none"),
            "Created EVM account"
        );
        Ok(account)
    })
    .await
}

pub(crate) async fn new_smart_wallet(
    connector: &dyn WalletConnector,
    owner: OwnerSource<'_>,
) -> Result<SmartAccount> {
    session::scoped(connector, move |client| async move {
        let owner = resolve_owner(connector, client.as_ref(), owner).await?;

        let smart_account = client.create_smart_account(&owner).await?;
        info!(
            address = %smart_account.address,
            owners = %smart_account.owners_display(),
            "Created Smart account"
        );
        Ok(smart_account)
    })
    .await
}

/// Turn an [`OwnerSource`] into a concrete account.
///
/// A new owner is minted through its own client session, as a standalone
/// EOA creation would be.
async fn resolve_owner(
    connector: &dyn WalletConnector,
    client: &dyn WalletApi,
    source: OwnerSource<'_>,
) -> Result<Account> {
    match source {
        OwnerSource::Create => {
            let account = new_eoa(connector, None).await?;
            info!(address = %account.address, "Owner account created");
            Ok(account)
        }
        OwnerSource::Existing(address) => {
            let account = client.get_account(address).await?;
            info!(address = %account.address, "Owner account obtained");
            Ok(account)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_source_from_option() {
        assert_eq!(OwnerSource::from(None), OwnerSource::Create);
        assert_eq!(
            OwnerSource::from(Some("0xowner")),
            OwnerSource::Existing("0xowner")
        );
    }
}

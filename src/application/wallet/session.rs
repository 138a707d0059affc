//! Scoped wallet client lifetime.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::port::{WalletApi, WalletConnector};

/// Run `body` with a freshly acquired client and release it afterwards.
///
/// The client is closed whether `body` succeeds or fails. If acquiring the
/// client fails, `body` never runs.
///
/// # Errors
///
/// Returns the connection error or whatever `body` returns.
pub async fn scoped<T, F, Fut>(connector: &dyn WalletConnector, body: F) -> Result<T>
where
    F: FnOnce(Arc<dyn WalletApi>) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let client = connector.connect().await?;
    debug!("Wallet client acquired");

    let outcome = body(Arc::clone(&client)).await;

    client.close().await;
    debug!(ok = outcome.is_ok(), "Wallet client released");
    outcome
}

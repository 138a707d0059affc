//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::debug;

use crate::adapter::outbound::cdp::{CdpConnector, CdpCredentials};
use crate::infrastructure::config::settings::Config;

/// Build the wallet connector from configuration and the process environment.
///
/// Credentials are read now but only validated when a client is acquired.
#[must_use]
pub fn wallet_connector(config: &Config) -> CdpConnector {
    let credentials = CdpCredentials::from_env();
    debug!(
        base_url = %config.api.base_url,
        api_key = credentials.api_key_id.is_some(),
        wallet_secret = credentials.wallet_secret.is_some(),
        "Wallet connector configured"
    );
    CdpConnector::new(config.api.clone(), config.wait.clone(), credentials)
}

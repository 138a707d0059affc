//! cdp-wallet - command-line client for Coinbase Developer Platform EVM wallets.
//!
//! Creates externally-owned and smart accounts, requests testnet faucet funds
//! and transfers native ETH from a smart account on Base Sepolia.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - accounts, user operations, networks and amount conversion
//! - **`port`** - the wallet service trait the application depends on
//! - **`application`** - one use case per command, each with a scoped client
//! - **`adapter`** - the `clap` front end (inbound) and the CDP REST client (outbound)
//! - **`infrastructure`** - configuration, logging and wiring
//!
//! # Modules
//!
//! - [`domain`] - Wallet-service value types
//! - [`port`] - Outbound port traits
//! - [`application`] - Wallet use cases
//! - [`adapter`] - CLI and CDP adapters
//! - [`infrastructure`] - Configuration and bootstrap
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - In-memory wallet service for integration tests
//!
//! # Example
//!
//! ```no_run
//! use cdp_wallet::application::wallet;
//! use cdp_wallet::infrastructure::{bootstrap, config::settings::Config};
//!
//! # async fn demo() -> cdp_wallet::error::Result<()> {
//! let config = Config::load_or_default("cdp-wallet.toml")?;
//! let connector = bootstrap::wallet_connector(&config);
//! let account = wallet::create_eoa_wallet(&connector, Some("treasury")).await?;
//! println!("{account}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

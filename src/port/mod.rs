//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture. The
//! application layer talks to the wallet service only through them, so the
//! operations can be exercised against an in-memory implementation.
//!
//! # Architecture
//!
//! ```text
//!     ┌──────────────┐      ┌─────────────────────────┐
//!     │ CLI Adapter  ├─────►│      Application        │
//!     └──────────────┘      │   (wallet operations)   │
//!                           └────────────┬────────────┘
//!                                        │ WalletConnector / WalletApi
//!                                        ▼
//!                           ┌─────────────────────────┐
//!                           │   CDP Adapter (HTTP)    │
//!                           └─────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`WalletConnector`], [`WalletApi`] - Remote custodial wallet service

pub mod outbound;

pub use outbound::wallet::{WalletApi, WalletConnector};

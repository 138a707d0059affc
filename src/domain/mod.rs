//! Wallet-service value types shared by every layer.

pub mod account;
pub mod amount;
pub mod network;
pub mod user_operation;

pub use account::{Account, SmartAccount};
pub use amount::ether_to_wei;
pub use network::Network;
pub use user_operation::{EncodedCall, UserOperation, UserOperationStatus};

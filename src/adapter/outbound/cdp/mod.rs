//! Coinbase Developer Platform wallet service integration.

pub mod auth;
pub mod client;
pub mod dto;
pub mod settings;

pub use client::{CdpClient, CdpConnector};
pub use settings::{ApiConfig, CdpCredentials, WaitConfig};

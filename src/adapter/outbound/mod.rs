//! Outbound adapters (driven side).

pub mod cdp;

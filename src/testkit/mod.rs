//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`wallet`] - `RecordingWallet`, an in-memory wallet service that records
//!   every call and every client acquire/release.

pub mod wallet;

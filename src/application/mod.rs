//! Application services (use cases).
//!
//! These services sequence calls against the wallet port to implement the
//! application's use cases.

pub mod wallet;

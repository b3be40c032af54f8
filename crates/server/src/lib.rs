//! HTTP server for the lunchbot webhook.
//!
//! Exposed as a library so integration tests can build the router with
//! mock dependencies injected.

pub mod api;
pub mod metrics;
pub mod state;

//! HTTP front end for the release gatekeeper.

pub mod api;
pub mod metrics;
pub mod state;

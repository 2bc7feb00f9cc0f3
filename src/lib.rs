//! DNS record manager for a single Cloudflare zone.
//!
//! The library holds everything behind the manager screen: stored settings,
//! the provider client, the pagination walk, the filter/page view state and
//! the record forms. The `zonedesk-proxy` binary serves the [`proxy`]
//! forwarder for browsers that cannot reach the provider directly.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod manager;
pub mod proxy;
pub mod records;
pub mod view;

pub use error::{Error, Result};
pub use manager::DnsManager;

#[cfg(test)]
mod tests;

pub mod client;
pub mod cloudflare;
pub mod models;

pub use client::DnsApiClient;
pub use cloudflare::{CloudflareClient, Endpoint, API_BASE_URL};
pub use models::{DnsRecord, RecordBody, RecordPage, ZoneAccess};

use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

/// The four record operations of the provider. Every call carries its own
/// credential and zone, no state is kept between calls and nothing is
/// retried.
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn list_records_page(
        &self,
        access: &ZoneAccess,
        page: u32,
        per_page: u32,
    ) -> Result<RecordPage>;

    async fn create_record(&self, access: &ZoneAccess, body: &RecordBody) -> Result<DnsRecord>;

    async fn update_record(
        &self,
        access: &ZoneAccess,
        record_id: &str,
        body: &RecordBody,
    ) -> Result<DnsRecord>;

    async fn delete_record(&self, access: &ZoneAccess, record_id: &str) -> Result<()>;
}

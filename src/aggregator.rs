//! Walks the paginated listing into one complete collection.
//!
//! Pages are requested one after another; the page count is only known once
//! the first response arrives. Records added or removed on the provider
//! while the walk is in progress can be skipped or listed twice: nothing
//! here reconciles pages against each other.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use log::{debug, info, warn};

use crate::api::{DnsApiClient, DnsRecord, ZoneAccess};
use crate::error::Result;

/// Page size requested from the provider.
pub const LIST_PAGE_SIZE: u32 = 100;

/// Fetches every record of the zone in request order. The first failure
/// aborts the walk and nothing collected so far is returned.
pub async fn fetch_all_records<C>(client: &C, access: &ZoneAccess) -> Result<Vec<DnsRecord>>
where
    C: DnsApiClient + ?Sized,
{
    let mut records = Vec::new();
    let mut page = 1;

    loop {
        let batch = client
            .list_records_page(access, page, LIST_PAGE_SIZE)
            .await?;
        debug!(
            "Fetched page {} of {:?} ({} records)",
            page,
            batch.total_pages,
            batch.records.len()
        );
        records.extend(batch.records);

        match batch.total_pages {
            Some(total) if page < total => page += 1,
            _ => break,
        }
    }

    info!("Loaded {} records in {} page(s)", records.len(), page);
    Ok(records)
}

/// Orders records by type, then by name using root-locale collation.
/// Stable.
pub fn sort_records(records: &mut [DnsRecord]) {
    let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Collator unavailable, sorting names by code point: {}", e);
            None
        }
    };

    records.sort_by(|a, b| {
        a.r#type.cmp(&b.r#type).then_with(|| match &collator {
            Some(collator) => compare_names(collator, &a.name, &b.name),
            None => a.name.cmp(&b.name),
        })
    });
}

/// Collated comparison; the raw strings only break ties the collator
/// considers equal.
pub fn compare_names(collator: &Collator, a: &str, b: &str) -> Ordering {
    collator.compare(a, b).then_with(|| a.cmp(b))
}

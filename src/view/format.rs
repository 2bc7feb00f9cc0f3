use crate::api::DnsRecord;

/// Human readable TTL. `1` is the provider's automatic TTL.
pub fn format_ttl(ttl: u32) -> String {
    match ttl {
        1 => "Auto".to_string(),
        t if t < 60 => format!("{}s", t),
        t if t < 3600 => format!("{}m", t / 60),
        t if t < 86400 => format!("{}h", t / 3600),
        t => format!("{}d", t / 86400),
    }
}

/// Content column, prefixed with the priority when the record has one.
pub fn display_content(record: &DnsRecord) -> String {
    match record.priority {
        Some(priority) => format!("{} {}", priority, record.content),
        None => record.content.clone(),
    }
}

pub fn proxied_label(record: &DnsRecord) -> &'static str {
    match (record.proxiable, record.proxied) {
        (true, true) => "ON",
        (true, false) => "OFF",
        (false, _) => "—",
    }
}

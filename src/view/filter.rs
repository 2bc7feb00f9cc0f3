use std::collections::BTreeSet;
use std::fmt;

use crate::api::DnsRecord;

/// Type selector value. `All` is always the first option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn matches(&self, record: &DnsRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => record.r#type == *t,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "All types"),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

/// Search text and type selection applied to the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub search: String,
    pub r#type: TypeFilter,
}

impl RecordFilter {
    /// Case-insensitive substring match over "type name content", combined
    /// with the type selection.
    pub fn matches(&self, record: &DnsRecord) -> bool {
        if !self.r#type.matches(record) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        format!("{} {} {}", record.r#type, record.name, record.content)
            .to_lowercase()
            .contains(&needle)
    }

    pub fn apply(&self, records: &[DnsRecord]) -> Vec<DnsRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// The page of filtered records currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a> {
    pub records: &'a [DnsRecord],
    pub current_page: usize,
    pub total_pages: usize,
}

pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1)).max(1)
}

/// Slices `filtered` to the requested page, clamping the page into
/// `1..=total_pages`.
pub fn page_window(filtered: &[DnsRecord], current_page: usize, per_page: usize) -> PageWindow<'_> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(filtered.len(), per_page);
    let current_page = current_page.clamp(1, total_pages);

    let start = (current_page - 1) * per_page;
    let end = (start + per_page).min(filtered.len());

    PageWindow {
        records: &filtered[start.min(end)..end],
        current_page,
        total_pages,
    }
}

/// Distinct types present in the collection, sorted, after `All`.
pub fn type_options(records: &[DnsRecord]) -> Vec<TypeFilter> {
    let types: BTreeSet<&str> = records.iter().map(|r| r.r#type.as_str()).collect();

    std::iter::once(TypeFilter::All)
        .chain(types.into_iter().map(|t| TypeFilter::Only(t.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(r#type: &str, name: &str, content: &str) -> DnsRecord {
        DnsRecord {
            id: name.to_string(),
            r#type: r#type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: 1,
            priority: None,
            proxiable: false,
            proxied: false,
        }
    }

    fn sample() -> Vec<DnsRecord> {
        vec![
            record("A", "www.example.com", "192.0.2.1"),
            record("AAAA", "www.example.com", "2001:db8::1"),
            record("MX", "example.com", "mail.example.com"),
            record("TXT", "example.com", "v=spf1 include:_spf.example.net ~all"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_type_name_content() {
        let filter = RecordFilter {
            search: "  MAIL ".to_string(),
            ..RecordFilter::default()
        };
        let found = filter.apply(&sample());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].r#type, "MX");

        let by_type = RecordFilter {
            search: "aaaa".to_string(),
            ..RecordFilter::default()
        };
        assert_eq!(by_type.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_type_filter_is_exact_and_combined_with_search() {
        let filter = RecordFilter {
            search: "www".to_string(),
            r#type: TypeFilter::Only("A".to_string()),
        };
        let found = filter.apply(&sample());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "192.0.2.1");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = RecordFilter {
            search: "example".to_string(),
            r#type: TypeFilter::Only("TXT".to_string()),
        };
        let once = filter.apply(&sample());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_page_window_clamps_current_page() {
        let records = sample();
        let window = page_window(&records, 7, 3);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.current_page, 2);
        assert_eq!(window.records.len(), 1);
        assert_eq!(window.records[0].r#type, "TXT");

        let window = page_window(&records, 0, 3);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.records.len(), 3);
    }

    #[test]
    fn test_page_window_invariants() {
        let records: Vec<_> = (0..37)
            .map(|i| record("A", &format!("host{}", i), "192.0.2.1"))
            .collect();

        for per_page in 1..12 {
            for current in 0..45 {
                let window = page_window(&records, current, per_page);
                assert_eq!(window.total_pages, 37usize.div_ceil(per_page).max(1));
                assert!(window.current_page >= 1);
                assert!(window.current_page <= window.total_pages);
                assert!(window.records.len() <= per_page);
                assert!(!window.records.is_empty());
            }
        }
    }

    #[test]
    fn test_empty_collection_has_one_empty_page() {
        let window = page_window(&[], 3, 50);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.total_pages, 1);
        assert!(window.records.is_empty());
    }

    #[test]
    fn test_type_options_sorted_after_all() {
        let mut records = sample();
        records.push(record("A", "api.example.com", "192.0.2.2"));

        let options = type_options(&records);
        assert_eq!(
            options,
            vec![
                TypeFilter::All,
                TypeFilter::Only("A".to_string()),
                TypeFilter::Only("AAAA".to_string()),
                TypeFilter::Only("MX".to_string()),
                TypeFilter::Only("TXT".to_string()),
            ]
        );
        assert_eq!(options[0].to_string(), "All types");
        assert_eq!(type_options(&[]), vec![TypeFilter::All]);
    }
}

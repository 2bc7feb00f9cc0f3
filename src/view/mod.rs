//! Filter, sort and page state over the loaded record collection.

pub mod filter;
pub mod format;

pub use filter::{page_window, type_options, PageWindow, RecordFilter, TypeFilter};
pub use format::{display_content, format_ttl, proxied_label};

use crate::api::DnsRecord;

pub const NO_MATCH_MESSAGE: &str = "No records match your filter.";

/// Explicit view state. Every input change recomputes the filtered
/// collection and clamps the current page.
#[derive(Debug, Clone)]
pub struct ViewModel {
    all_records: Vec<DnsRecord>,
    filtered: Vec<DnsRecord>,
    filter: RecordFilter,
    current_page: usize,
    total_pages: usize,
    per_page: usize,
}

impl ViewModel {
    pub fn new(per_page: usize) -> Self {
        Self {
            all_records: Vec::new(),
            filtered: Vec::new(),
            filter: RecordFilter::default(),
            current_page: 1,
            total_pages: 1,
            per_page: per_page.max(1),
        }
    }

    /// Replaces the collection. The page is kept where possible; a type
    /// selection that no longer exists falls back to all types.
    pub fn set_records(&mut self, records: Vec<DnsRecord>) {
        self.all_records = records;
        if let TypeFilter::Only(t) = &self.filter.r#type {
            if !self.all_records.iter().any(|r| r.r#type == *t) {
                self.filter.r#type = TypeFilter::All;
            }
        }
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.current_page = 1;
        self.recompute();
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.filter.r#type = type_filter;
        self.current_page = 1;
        self.recompute();
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.recompute();
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    fn recompute(&mut self) {
        self.filtered = self.filter.apply(&self.all_records);
        self.total_pages = filter::total_pages(self.filtered.len(), self.per_page);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    pub fn window(&self) -> PageWindow<'_> {
        page_window(&self.filtered, self.current_page, self.per_page)
    }

    pub fn visible(&self) -> &[DnsRecord] {
        self.window().records
    }

    pub fn all_records(&self) -> &[DnsRecord] {
        &self.all_records
    }

    pub fn filtered(&self) -> &[DnsRecord] {
        &self.filtered
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn type_options(&self) -> Vec<TypeFilter> {
        type_options(&self.all_records)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Shown instead of the table when the filter hides every record.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.visible().is_empty() && !self.all_records.is_empty()).then_some(NO_MATCH_MESSAGE)
    }

    /// "current / total", or `None` when there is a single page.
    pub fn pagination_label(&self) -> Option<String> {
        (self.total_pages > 1).then(|| format!("{} / {}", self.current_page, self.total_pages))
    }
}

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by the list endpoints.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages,
/// `null` at either end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedList<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Total number of pages for a given page size.
    pub fn total_pages(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 1;
        }
        self.count.div_ceil(page_size).max(1)
    }
}

impl<T> Default for PaginatedList<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// Site-wide counters shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStatistics {
    pub published_cases: u64,
    pub entities_tracked: u64,
    pub cases_under_investigation: u64,
    pub cases_closed: u64,
    /// ISO datetime of the last recount.
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_no_neighbours() {
        let page: PaginatedList<u32> = PaginatedList::default();
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.total_pages(20), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: PaginatedList<u32> = serde_json::from_str(
            r#"{"count": 41, "next": "https://x/api/cases/?page=2", "previous": null, "results": [1, 2]}"#,
        )
        .unwrap();
        assert!(page.has_next());
        assert_eq!(page.total_pages(20), 3);
        assert_eq!(page.total_pages(0), 1);
    }
}

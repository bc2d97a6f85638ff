/// The pager collaborator contract. The widget reads the current zero-based
/// page index and reports the collection totals back, so the collaborator
/// can compute the number of pages to display.
pub trait Pager {
    fn find_page(&self) -> i64;
    fn create_pager(&mut self, total_items: usize, page_size: usize);
}

/// Pager state backed by a request query string (`page=N`).
#[derive(Clone, Debug, Default)]
pub struct RequestPager {
    current_page: i64,
    total_items: usize,
    page_size: usize,
}

impl RequestPager {
    pub fn new(current_page: i64) -> Self {
        Self {
            current_page,
            total_items: 0,
            page_size: 0,
        }
    }

    /// Reads the zero-based page index from a URL query string. A missing or
    /// malformed `page` parameter maps to the first page.
    pub fn from_query(query: &str) -> Self {
        let current_page = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page")
            .and_then(|(_, value)| value.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Self::new(current_page)
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            (self.total_items + self.page_size - 1) / self.page_size
        }
    }
}

impl Pager for RequestPager {
    fn find_page(&self) -> i64 {
        self.current_page
    }

    fn create_pager(&mut self, total_items: usize, page_size: usize) {
        self.total_items = total_items;
        self.page_size = page_size;
    }
}

use crate::records::UserRecord;

/// One page of the collection plus the counts the pager needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<UserRecord>,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Splits the collection into consecutive chunks of `page_size` (the last
/// chunk may be shorter) and returns the chunk at `page_index`. An
/// out-of-range index (negative or past the last chunk) yields an empty
/// page, never an error. `page_size` is clamped to at least 1.
pub fn paginate(records: &[UserRecord], page_size: usize, page_index: i64) -> Page {
    let page_size = page_size.max(1);
    let total_items = records.len();
    let total_pages = (total_items + page_size - 1) / page_size;
    let items = match usize::try_from(page_index) {
        Ok(index) => records
            .chunks(page_size)
            .nth(index)
            .map(|chunk| chunk.to_vec())
            .unwrap_or_default(),
        Err(_) => Vec::new(),
    };
    Page {
        items,
        total_items,
        total_pages,
    }
}

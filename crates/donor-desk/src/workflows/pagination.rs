use serde::Serialize;

/// Rows per page on every dashboard listing.
pub const PAGE_SIZE: usize = 10;

/// One page of a filtered listing. `total_count` counts the filtered set before
/// slicing so callers can render page links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice `items` to the requested 1-indexed page. Page 0 is read as page 1 and
    /// pages past the end come back empty.
    pub fn from_filtered(items: Vec<T>, page: usize) -> Self {
        let page = page.max(1);
        let total_count = items.len();
        let start = (page - 1).saturating_mul(PAGE_SIZE);

        let items = if start >= total_count {
            Vec::new()
        } else {
            items.into_iter().skip(start).take(PAGE_SIZE).collect()
        };

        Self {
            items,
            total_count,
            page,
            page_size: PAGE_SIZE,
            total_pages: total_count.div_ceil(PAGE_SIZE),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Case-insensitive substring match shared by the dashboard search boxes. A blank
/// needle matches everything.
pub(crate) fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|candidate| candidate.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_split_twenty_five_rows_into_three_pages() {
        let rows: Vec<u32> = (0..25).collect();

        let third = Page::from_filtered(rows.clone(), 3);
        assert_eq!(third.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(third.total_pages, 3);

        let fourth = Page::from_filtered(rows, 4);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_count, 25);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let page = Page::from_filtered(vec!["a", "b"], 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec!["a", "b"]);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let page = Page::<u8>::from_filtered(Vec::new(), 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        assert!(matches_search("  a+ ", &["BU001", "A+"]));
        assert!(matches_search("", &["anything"]));
        assert!(!matches_search("o-", &["BU001", "A+"]));
    }
}

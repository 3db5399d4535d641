//! Fixed-size page slicing applied after a listing is ordered.

use serde::Serialize;

/// Recipes per list page.
pub const PAGE_SIZE: usize = 6;

/// Parse a raw `page` query value. Anything that is not a positive integer is page 1.
pub fn parse_page_number(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually returned
    pub number: usize,
    pub page_size: usize,
    /// Total number of items across all pages
    pub total: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slice `items` into the requested page. Pages past the end resolve to the
/// last page; an empty input yields a single empty page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let num_pages = total.div_ceil(page_size).max(1);
    let number = page.clamp(1, num_pages);

    let items: Vec<T> = items
        .into_iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        number,
        page_size,
        total,
        num_pages,
        has_next: number < num_pages,
        has_previous: number > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number(None), 1);
        assert_eq!(parse_page_number(Some("3")), 3);
        assert_eq!(parse_page_number(Some("0")), 1);
        assert_eq!(parse_page_number(Some("-2")), 1);
        assert_eq!(parse_page_number(Some("last")), 1);
    }

    #[test]
    fn test_first_page_of_ten() {
        let page = paginate((0..10).collect(), 1, PAGE_SIZE);
        assert_eq!(page.items, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(page.num_pages, 2);
        assert_eq!(page.total, 10);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_last_page_partial() {
        let page = paginate((0..10).collect(), 2, PAGE_SIZE);
        assert_eq!(page.items, vec![6, 7, 8, 9]);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_page_past_end_clamps_to_last() {
        let page = paginate((0..10).collect(), 99, PAGE_SIZE);
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let page: Page<i32> = paginate(Vec::new(), 4, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
    }
}

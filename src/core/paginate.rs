//! Fixed-size page slicing

use serde::Serialize;

/// One page of a sequence together with its display bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on the requested page
    pub page_items: Vec<T>,

    /// Number of pages; never less than 1, even for an empty sequence
    pub total_pages: usize,

    /// 1-based index of the first item shown (0 when the page is empty)
    pub first_index: usize,

    /// 1-based index of the last item shown (0 when the page is empty)
    pub last_index: usize,
}

/// Number of pages needed for `total` items, with a floor of 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into page number `page` (1-based)
///
/// The page is not clamped: page 0 or a page past the end yields an empty
/// slice. A page size of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let page_items: Vec<T> = match page.checked_sub(1) {
        Some(index) => items
            .iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    let (first_index, last_index) = if page_items.is_empty() {
        (0, 0)
    } else {
        let first = (page - 1) * page_size + 1;
        (first, first + page_items.len() - 1)
    };

    Page {
        page_items,
        total_pages,
        first_index,
        last_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.first_index, 21);
        assert_eq!(page.last_index, 25);
    }

    #[test]
    fn test_middle_page_bounds() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.first_index, 11);
        assert_eq!(page.last_index, 20);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_empty_sequence_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.page_items.is_empty());
        assert_eq!((page.first_index, page.last_index), (0, 0));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 4, 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.page_items.is_empty());

        let page = paginate(&items, 0, 2);
        assert!(page.page_items.is_empty());
        assert_eq!((page.first_index, page.last_index), (0, 0));
    }

    #[test]
    fn test_zero_page_size_behaves_like_one() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.page_items, vec!["b"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_total_pages_floor() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}

use serde::Serialize;

use crate::filters::Pagination;

/// Envelope returned by paginated list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, window: Pagination) -> Self {
        let limit = window.limit.max(1);
        let pages = if total > 0 { (total - 1) / limit + 1 } else { 0 };
        Self {
            total,
            page: window.page(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        let window = Pagination { limit: 10, offset: 20 };
        let meta = PageMeta::new(21, window);
        assert_eq!(meta, PageMeta { total: 21, page: 3, pages: 3 });
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let meta = PageMeta::new(20, Pagination { limit: 10, offset: 0 });
        assert_eq!(meta.pages, 2);
        assert_eq!(meta.page, 1);
    }

    #[test]
    fn huge_limit_is_a_single_page() {
        let meta = PageMeta::new(3, Pagination { limit: i64::MAX, offset: 0 });
        assert_eq!(meta, PageMeta { total: 3, page: 1, pages: 1 });
    }

    #[test]
    fn no_rows_means_no_pages() {
        let meta = PageMeta::new(0, Pagination { limit: 10, offset: 0 });
        assert_eq!(meta.pages, 0);
    }
}

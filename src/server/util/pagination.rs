//! Page/limit arithmetic shared by every paginated listing.

/// One page of results plus the totals needed for the response `meta` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        Self {
            items,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }

    /// An empty result for lookups whose owner doesn't exist.
    pub fn empty(page: u64, limit: u64) -> Self {
        Self::new(Vec::new(), 0, page, limit)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }

    pub fn meta(&self) -> crate::model::api::PaginationMetaDto {
        crate::model::api::PaginationMetaDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit > 0 {
        total.div_ceil(limit)
    } else {
        0
    }
}

/// Converts a 1-based page number into SeaORM's 0-based page index.
pub fn page_index(page: u64) -> u64 {
    page.saturating_sub(1)
}

/// Row offset of the first item on `page`, or `None` when it doesn't fit a SQL `OFFSET`.
pub fn page_offset(page: u64, limit: u64) -> Option<u64> {
    page_index(page)
        .checked_mul(limit)
        .filter(|offset| *offset <= i64::MAX as u64)
}

/// Whether `page` starts before `total`, so fetching it can return rows.
pub fn page_in_range(page: u64, limit: u64, total: u64) -> bool {
    page_offset(page, limit).is_some_and(|offset| offset < total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_total_pages_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn page_index_is_zero_based() {
        assert_eq!(page_index(1), 0);
        assert_eq!(page_index(3), 2);
        assert_eq!(page_index(0), 0);
    }

    #[test]
    fn page_offset_rejects_overflow() {
        assert_eq!(page_offset(1, 50), Some(0));
        assert_eq!(page_offset(3, 10), Some(20));
        assert_eq!(page_offset(i64::MAX as u64, 50), None);
        assert_eq!(page_offset(u64::MAX, 2), None);
        assert_eq!(page_offset(u64::MAX, 1), None);
    }

    /// Tests that pages past the last row are skipped without querying.
    #[test]
    fn page_in_range_checks_offset_against_total() {
        assert!(page_in_range(1, 10, 1));
        assert!(page_in_range(2, 10, 11));
        assert!(!page_in_range(2, 10, 10));
        assert!(!page_in_range(1, 10, 0));
        assert!(!page_in_range(i64::MAX as u64, 50, 100));
    }
}

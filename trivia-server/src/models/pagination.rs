//! Page slicing for question listings

use serde::Deserialize;

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: usize,
}

impl Pagination {
    /// Create pagination, clamping page and per_page to a minimum of 1.
    pub fn new(page: u32, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.per_page)
    }

    /// Slice `items` down to this page, clipped to bounds.
    ///
    /// A page past the end yields an empty slice; callers decide whether
    /// that is an error.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as raw text: an absent, zero, negative or non-numeric
/// value falls back to page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn zero_page_literal_does_not_underflow() {
        let p = Pagination { page: 0, per_page: 10 };
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn clamps_page_and_size() {
        let p = Pagination::new(0, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn full_pages_then_remainder() {
        let items: Vec<u32> = (0..25).collect();

        for page in 1..=2 {
            assert_eq!(Pagination::new(page, 10).slice(&items).len(), 10);
        }
        assert_eq!(Pagination::new(3, 10).slice(&items), &[20, 21, 22, 23, 24]);
        assert_eq!(Pagination::new(2, 10).slice(&items)[0], 10);
    }

    #[test]
    fn beyond_last_page_is_empty() {
        let items: Vec<u32> = (0..20).collect();
        assert!(Pagination::new(3, 10).slice(&items).is_empty());
        assert!(Pagination::new(1000, 10).slice(&items).is_empty());
        assert!(Pagination::new(u32::MAX, 10).slice(&items).is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        let items: Vec<u32> = Vec::new();
        assert!(Pagination::default().slice(&items).is_empty());
    }

    #[test]
    fn params_fall_back_to_first_page() {
        assert_eq!(Pagination::from(params(None)).page, 1);
        assert_eq!(Pagination::from(params(Some("abc"))).page, 1);
        assert_eq!(Pagination::from(params(Some("-2"))).page, 1);
        assert_eq!(Pagination::from(params(Some("0"))).page, 1);
        assert_eq!(Pagination::from(params(Some("4"))).page, 4);
        assert_eq!(Pagination::from(params(Some("4"))).per_page, QUESTIONS_PER_PAGE);
    }
}

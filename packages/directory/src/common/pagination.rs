//! Skip/limit pagination for administrative list queries.

use serde::{Deserialize, Serialize};

/// Default page size when no limit is requested.
pub const DEFAULT_LIMIT: usize = 50;
/// Upper bound applied to any requested limit.
pub const MAX_LIMIT: usize = 100;

/// Input arguments for skip/limit pagination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageArgs {
    /// Items to skip from the start of the filtered result set.
    pub skip: usize,
    /// Maximum items to return (clamped to 1..=100).
    pub limit: usize,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageArgs {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Limit with bounds applied (1..=100, default 50 when zero).
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit.min(MAX_LIMIT)
        }
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total items matching the filter, before pagination.
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
    pub items: Vec<T>,
}

/// Apply skip/limit to an already-filtered result set.
pub fn paginate<T>(items: Vec<T>, args: &PageArgs) -> Page<T> {
    let total = items.len();
    let limit = args.effective_limit();
    let items = items.into_iter().skip(args.skip).take(limit).collect();

    Page {
        total,
        skip: args.skip,
        limit,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_applies_skip_and_limit() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, &PageArgs::new(2, 5));

        assert_eq!(page.total, 12);
        assert_eq!(page.items, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn limit_is_clamped_to_max() {
        let args = PageArgs::new(0, 500);
        assert_eq!(args.effective_limit(), MAX_LIMIT);
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        let args = PageArgs::new(0, 0);
        assert_eq!(args.effective_limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn skip_past_end_returns_empty_page() {
        let items: Vec<i32> = (1..=3).collect();
        let page = paginate(items, &PageArgs::new(10, 5));

        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());
    }
}

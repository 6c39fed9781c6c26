//! The page window shared by every paginated list.

use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const DEFAULT_WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    First,
    Ellipsis,
    Page(u32),
    Last(u32),
}

/// Number of pages needed for `total_count` items.
#[must_use]
pub const fn total_pages(total_count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(limit as u64);
    if pages > u32::MAX as u64 {
        u32::MAX
    } else {
        pages as u32
    }
}

fn window_range(current: u32, total: u32, window: u32) -> Option<RangeInclusive<u32>> {
    if total == 0 {
        return None;
    }
    let window = window.max(1);
    let current = current.clamp(1, total);
    if total <= window {
        return Some(1..=total);
    }
    let half = window / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (start + window - 1).min(total);
    Some((end + 1 - window)..=end)
}

/// The page numbers of the window around `current`.
#[must_use]
pub fn visible_pages(current: u32, total: u32, window: u32) -> Vec<u32> {
    window_range(current, total, window)
        .map(Iterator::collect)
        .unwrap_or_default()
}

/// Like [`visible_pages`] but with jump markers to the first and last page.
#[must_use]
pub fn page_items(current: u32, total: u32, window: u32) -> Vec<PageItem> {
    let Some(range) = window_range(current, total, window) else {
        return vec![];
    };
    let (start, end) = (*range.start(), *range.end());
    let mut items = Vec::with_capacity(range.clone().count() + 4);
    if start > 1 {
        items.push(PageItem::First);
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend(range.map(PageItem::Page));
    if end < total {
        if end + 1 < total {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Last(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_show_every_page() {
        for total in 1..=5 {
            for current in 1..=total {
                assert_eq!(
                    visible_pages(current, total, DEFAULT_WINDOW),
                    (1..=total).collect::<Vec<_>>()
                );
            }
        }
        assert!(visible_pages(1, 0, DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn large_totals_show_a_full_window_around_current() {
        for total in 6..=20 {
            for current in 1..=total {
                let pages = visible_pages(current, total, DEFAULT_WINDOW);
                assert_eq!(pages.len(), 5);
                assert!(pages.contains(&current));
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn window_is_pinned_at_both_ends() {
        assert_eq!(visible_pages(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(3, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(4, 10, 5), vec![2, 3, 4, 5, 6]);
        assert_eq!(visible_pages(8, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(visible_pages(0, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(99, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn jump_markers() {
        use PageItem::*;
        assert_eq!(
            page_items(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Last(10)]
        );
        assert_eq!(
            page_items(4, 10, 5),
            vec![First, Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Last(10)]
        );
        assert_eq!(
            page_items(6, 10, 5),
            vec![First, Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Last(10)]
        );
        assert_eq!(
            page_items(10, 10, 5),
            vec![First, Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_items(2, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert!(page_items(1, 0, 5).is_empty());
    }

    #[test]
    fn count_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(31, 0), 0);
    }
}

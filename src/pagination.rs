//! Page-number strip for lists paginated in memory.

use serde::Serialize;

/// Blog posts shown per listing page.
pub const BLOG_POSTS_PER_PAGE: usize = 9;

/// Page numbers to render, with `None` marking an elided gap.
fn page_strip(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Slices `all` to the requested page. Out-of-range pages clamp to the
    /// last page; page `0` is treated as the first.
    pub fn from_vec(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = all.len().div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        let items = all
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            pages: page_strip(total_pages, page, 1, 1, 1, 1),
            page,
            total_pages,
        }
    }
}

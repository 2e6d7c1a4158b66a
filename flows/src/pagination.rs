//! Page slicing with clamped page numbers.

use serde::Serialize;

pub const COUNTRIES_PER_PAGE: usize = 12;
pub const MATERIALS_PER_PAGE: usize = 9;
pub const CORRIDORS_PER_PAGE: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, always within `1..=total_pages`.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first item on this page, 0 when empty.
    #[must_use]
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

/// Parse a requested page number. Missing, non-numeric and zero values all
/// mean page 1. Digit strings too large for `usize` saturate so `paginate`
/// clamps them to the last page.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim) else {
        return 1;
    };
    match raw.parse::<usize>() {
        Ok(page) if page > 0 => page,
        Ok(_) => 1,
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
        Err(_) => 1,
    }
}

/// Slice `items` into the requested page, clamping past-the-end requests to the
/// last page. `per_page` of zero is treated as one.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;

    let items = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        page,
        per_page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;

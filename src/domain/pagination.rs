//! Pagination - Client-side Page State and Projection

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE_OPTIONS;
use crate::error::Error;

/// Rows per page, restricted to the offered options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Fifteen,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Fifteen];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => PAGE_SIZE_OPTIONS[0],
            PageSize::Ten => PAGE_SIZE_OPTIONS[1],
            PageSize::Fifteen => PAGE_SIZE_OPTIONS[2],
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| Error::Invalid {
                message: format!("page size {value} is not one of {PAGE_SIZE_OPTIONS:?}"),
            })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// Current page index and page size
///
/// The page index is never validated against the data; a page past the end
/// projects to an empty slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    size: PageSize,
}

impl Pagination {
    pub fn new(size: PageSize) -> Self {
        Self { page: 0, size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and go back to the first page
    pub fn set_page_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 0;
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size.get())
    }

    /// `items[page*size .. page*size+size]`, clamped; empty when out of range
    pub fn project<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.size.get()).min(items.len());
        &items[start..end]
    }

    /// Index of the last page for `total` rows (0 when empty)
    pub fn last_page(&self, total: usize) -> usize {
        total.saturating_sub(1) / self.size.get()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.offset().saturating_add(self.size.get()) < total
    }

    /// Step forward, staying on the last page
    pub fn next_page(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.set_page(self.page + 1);
        true
    }

    /// Step back, staying on the first page
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.set_page(self.page - 1);
        true
    }

    /// Footer label such as `"6–7 of 7"`
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let from = self.offset().saturating_add(1).min(total);
        let to = self.offset().saturating_add(self.size.get()).min(total);
        format!("{from}–{to} of {total}")
    }
}

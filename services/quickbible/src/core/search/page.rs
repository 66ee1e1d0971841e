//! Fixed-size pagination over search results.

use serde::Serialize;

use crate::core::types::Verse;

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<'a> {
    /// 1-based page number actually returned
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub verses: Vec<&'a Verse>,
}

impl<'a> SearchPage<'a> {
    /// Slice `results` into the requested page
    ///
    /// `page` is clamped to `1..=total_pages`; a zero `page_size` is
    /// treated as 1.
    pub fn from_results(results: Vec<&'a Verse>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_results = results.len();
        let total_pages = total_results.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        let verses = results
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Self {
            page,
            total_pages,
            total_results,
            verses,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

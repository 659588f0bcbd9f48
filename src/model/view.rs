// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! List view state.
//!
//! Holds the search term, selected year and current page, and runs the
//! filter then paginate pipeline against a catalog to produce what the list
//! view draws.
//!
//! Changing the search term or the year always returns to the first page.

use crate::model::{
    MovieRecord, YearFilter,
    filter::apply_filters,
    paginate::{PAGE_SIZE, paginate},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewState {
    pub(crate) current_page: usize,
    pub(crate) search_term: String,
    pub(crate) year: YearFilter,
}

/// The visible slice of the catalog after filtering and pagination.
#[derive(Debug)]
pub(crate) struct VisiblePage<'a> {
    pub(crate) movies: Vec<&'a MovieRecord>,
    pub(crate) current_page: usize,
    pub(crate) total_pages: usize,
    pub(crate) total_matches: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub(crate) fn new() -> Self {
        Self {
            current_page: 1,
            search_term: String::new(),
            year: YearFilter::NoFilter,
        }
    }

    /// Sets the search term, returning `true` if it changed.
    pub(crate) fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term.to_string();
        self.current_page = 1;
        true
    }

    /// Sets the year filter, returning `true` if it changed.
    pub(crate) fn set_year(&mut self, year: YearFilter) -> bool {
        if self.year == year {
            return false;
        }
        self.year = year;
        self.current_page = 1;
        true
    }

    pub(crate) fn goto_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Number of records matching the current search and year.
    pub(crate) fn match_count(&self, records: &[MovieRecord]) -> usize {
        apply_filters(records, &self.search_term, &self.year).len()
    }

    pub(crate) fn total_pages(&self, records: &[MovieRecord]) -> usize {
        self.match_count(records).div_ceil(PAGE_SIZE)
    }

    /// Runs the filter and paginate pipeline.
    ///
    /// A current page beyond the last page is clamped to the last page, so a
    /// stale page number never shows an empty list while results exist.
    pub(crate) fn visible<'a>(&self, records: &'a [MovieRecord]) -> VisiblePage<'a> {
        let filtered = apply_filters(records, &self.search_term, &self.year);
        let total_pages = filtered.len().div_ceil(PAGE_SIZE);
        let current_page = self.current_page.clamp(1, total_pages.max(1));

        let page = paginate(&filtered, PAGE_SIZE, current_page);

        VisiblePage {
            movies: page.items.to_vec(),
            current_page,
            total_pages: page.total_pages,
            total_matches: filtered.len(),
        }
    }
}

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

//! Year selector for the list view.
//!
//! Holds the options derived from the catalog and cycles through them. The
//! selected value itself lives in the view state.

mod render;

use crate::model::{MovieRecord, YearFilter, filter::derive_year_options};

pub(crate) struct YearSelector {
    options: Vec<YearFilter>,
}

impl YearSelector {
    pub(crate) fn new() -> Self {
        Self {
            options: vec![YearFilter::NoFilter],
        }
    }

    pub(crate) fn options(&self) -> &[YearFilter] {
        &self.options
    }

    /// Re-derives the options from the catalog.
    ///
    /// Returns the filter to keep: `current` if it is still offered,
    /// otherwise "no filter".
    pub(crate) fn refresh(&mut self, records: &[MovieRecord], current: &YearFilter) -> YearFilter {
        self.options = derive_year_options(records);

        if self.options.contains(current) {
            current.clone()
        } else {
            YearFilter::NoFilter
        }
    }

    pub(crate) fn next_after(&self, current: &YearFilter) -> YearFilter {
        let len = self.options.len();
        let next = match self.position(current) {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.options[next].clone()
    }

    pub(crate) fn previous_before(&self, current: &YearFilter) -> YearFilter {
        let len = self.options.len();
        let previous = match self.position(current) {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.options[previous].clone()
    }

    fn position(&self, current: &YearFilter) -> Option<usize> {
        self.options.iter().position(|o| o == current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> YearSelector {
        let mut selector = YearSelector::new();
        selector.refresh(
            &[
                MovieRecord::new("Alpha", "", 2020, ""),
                MovieRecord::new("Beta", "", 2021, ""),
                MovieRecord::new("Gamma", "", 2020, ""),
            ],
            &YearFilter::NoFilter,
        );
        selector
    }

    #[test]
    fn options_follow_catalog() {
        assert_eq!(
            selector().options(),
            &[
                YearFilter::NoFilter,
                YearFilter::Year(2021),
                YearFilter::Year(2020)
            ]
        );
    }

    #[test]
    fn cycling_wraps_around() {
        let selector = selector();
        assert_eq!(selector.next_after(&YearFilter::NoFilter), YearFilter::Year(2021));
        assert_eq!(selector.next_after(&YearFilter::Year(2020)), YearFilter::NoFilter);
        assert_eq!(selector.previous_before(&YearFilter::NoFilter), YearFilter::Year(2020));
        assert_eq!(
            selector.previous_before(&YearFilter::Year(2020)),
            YearFilter::Year(2021)
        );
    }

    #[test]
    fn unknown_selection_restarts_cycle() {
        let selector = selector();
        let unknown = YearFilter::Unparseable("abc".to_string());
        assert_eq!(selector.next_after(&unknown), YearFilter::NoFilter);
    }

    #[test]
    fn refresh_drops_vanished_year() {
        let mut selector = selector();
        let kept = selector.refresh(&[MovieRecord::new("Beta", "", 2021, "")], &YearFilter::Year(2021));
        assert_eq!(kept, YearFilter::Year(2021));

        let dropped = selector.refresh(&[], &YearFilter::Year(2021));
        assert_eq!(dropped, YearFilter::NoFilter);
    }
}

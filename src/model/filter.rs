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

//! Catalog filtering.
//!
//! Pure functions narrowing a sequence of records by title and by year. The
//! filters preserve input order and borrow rather than clone, so they can be
//! chained cheaply on every frame.

use std::collections::BTreeSet;

use crate::model::{MovieRecord, YearFilter};

/// Keeps records whose title contains `term`, ignoring case.
///
/// The term is trimmed first; an empty term keeps everything.
pub(crate) fn filter_by_title<'a, I>(records: I, term: &str) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let term = term.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| term.is_empty() || r.title.to_lowercase().contains(&term))
        .collect()
}

/// Keeps records matching the year filter.
pub(crate) fn filter_by_year<'a, I>(records: I, year: &YearFilter) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records.into_iter().filter(|r| year.matches(r.year)).collect()
}

/// Title filter followed by year filter.
pub(crate) fn apply_filters<'a>(
    records: &'a [MovieRecord],
    term: &str,
    year: &YearFilter,
) -> Vec<&'a MovieRecord> {
    filter_by_year(filter_by_title(records, term), year)
}

/// Options for the year selector: the "no filter" sentinel followed by each
/// distinct year in the catalog, newest first.
pub(crate) fn derive_year_options(records: &[MovieRecord]) -> Vec<YearFilter> {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();

    std::iter::once(YearFilter::NoFilter)
        .chain(years.into_iter().rev().map(YearFilter::Year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Alpha", "", 2020, ""),
            MovieRecord::new("Beta", "", 2021, ""),
            MovieRecord::new("Gamma", "", 2020, ""),
            MovieRecord::new("The Alphabet", "", 1999, ""),
        ]
    }

    fn titles(records: &[&MovieRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn empty_term_matches_all() {
        let records = catalog();
        assert_eq!(filter_by_title(&records, "").len(), records.len());
        assert_eq!(filter_by_title(&records, "   ").len(), records.len());
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let records = catalog();
        let result = filter_by_title(&records, " ALPH ");
        assert_eq!(titles(&result), vec!["Alpha", "The Alphabet"]);

        for record in &result {
            assert!(record.title.to_lowercase().contains("alph"));
        }
    }

    #[test]
    fn year_filter_keeps_exact_matches_in_order() {
        let records = catalog();
        let result = filter_by_year(&records, &YearFilter::Year(2020));
        assert_eq!(titles(&result), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn no_filter_and_unparseable_year() {
        let records = catalog();
        assert_eq!(filter_by_year(&records, &YearFilter::NoFilter).len(), 4);
        assert!(filter_by_year(&records, &YearFilter::parse("twenty")).is_empty());
    }

    #[test]
    fn composed_filters_are_stable() {
        let records = catalog();
        let year = YearFilter::Year(2020);
        let first = apply_filters(&records, "a", &year);
        let second = filter_by_year(filter_by_title(&records, "a"), &year);

        assert_eq!(first, second);
        assert_eq!(titles(&first), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn year_options_are_descending_with_one_sentinel() {
        let options = derive_year_options(&catalog());
        assert_eq!(
            options,
            vec![
                YearFilter::NoFilter,
                YearFilter::Year(2021),
                YearFilter::Year(2020),
                YearFilter::Year(1999),
            ]
        );

        let sentinels = options
            .iter()
            .filter(|o| matches!(o, YearFilter::NoFilter))
            .count();
        assert_eq!(sentinels, 1);
    }

    #[test]
    fn year_options_for_empty_catalog() {
        assert_eq!(derive_year_options(&[]), vec![YearFilter::NoFilter]);
    }
}

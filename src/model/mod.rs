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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the movie
//! record and the year filter, together with the pure pipeline that turns a
//! catalog into the page of cards shown on screen.
//!
//! # Sub-modules
//!
//! * [`catalog`]: The in-memory catalog and the add-movie mutation.
//! * [`filter`]: Title and year filters, and year option derivation.
//! * [`paginate`]: Fixed-size page slicing.
//! * [`view`]: Transient view state (page, search term, year).
//! * [`route`]: Fragment routing between the list and add form views.
//! * [`toast`]: Transient user notifications.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod paginate;
pub(crate) mod route;
pub(crate) mod toast;
pub(crate) mod view;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The field names match both the startup data file and the persisted
/// snapshot, so the same type is used for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MovieRecord {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) year: i32,
    #[serde(default)]
    pub(crate) img: String,
}

impl MovieRecord {
    pub(crate) fn new(title: &str, description: &str, year: i32, img: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            year,
            img: img.to_string(),
        }
    }

    /// Heading shown on a movie card, e.g. `Alpha (2020)`.
    pub(crate) fn heading(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Raw add-form input, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MovieDraft {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) year: String,
    pub(crate) img: String,
}

/// The year selector value.
///
/// `Unparseable` keeps year text that could not be read as an integer; it
/// matches no records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum YearFilter {
    #[default]
    NoFilter,
    Year(i32),
    Unparseable(String),
}

impl YearFilter {
    pub(crate) fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return YearFilter::NoFilter;
        }

        match text.parse::<i32>() {
            Ok(year) => YearFilter::Year(year),
            Err(_) => YearFilter::Unparseable(text.to_string()),
        }
    }

    pub(crate) fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::NoFilter => true,
            YearFilter::Year(y) => *y == year,
            YearFilter::Unparseable(_) => false,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::NoFilter => write!(f, "All years"),
            YearFilter::Year(year) => write!(f, "{year}"),
            YearFilter::Unparseable(text) => write!(f, "{text}?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_filter_parse() {
        assert_eq!(YearFilter::parse(""), YearFilter::NoFilter);
        assert_eq!(YearFilter::parse("   "), YearFilter::NoFilter);
        assert_eq!(YearFilter::parse(" 2020 "), YearFilter::Year(2020));
        assert_eq!(
            YearFilter::parse("20x0"),
            YearFilter::Unparseable("20x0".to_string())
        );
    }

    #[test]
    fn unparseable_year_matches_nothing() {
        let filter = YearFilter::parse("abc");
        assert!(!filter.matches(2020));
        assert!(!filter.matches(0));
    }

    #[test]
    fn record_uses_img_field_name() {
        let json = r#"{"title":"Alpha","year":2020,"description":"d","img":"a.jpg"}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, MovieRecord::new("Alpha", "d", 2020, "a.jpg"));
        assert_eq!(record.heading(), "Alpha (2020)");
    }
}

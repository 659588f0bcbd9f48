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

//! Domain error types.
//!
//! Errors that the user can act on (a rejected add, a bad data file) are
//! modelled here as concrete enums. Plumbing failures elsewhere in the
//! application use [`anyhow`].

use thiserror::Error;

/// Reasons an add-movie request is rejected.
///
/// A rejected request never modifies the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("\"{0}\" is already in the catalog")]
    DuplicateTitle(String),

    #[error("a title is required")]
    MissingTitle,

    #[error("\"{0}\" is not a valid year")]
    MalformedYear(String),
}

/// Failure to read the startup movie data.
#[derive(Debug, Error)]
pub(crate) enum DataLoadError {
    #[error("failed to read movie data from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse movie data from {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_title_message_names_the_title() {
        let err = CatalogError::DuplicateTitle("Alpha".to_string());
        assert_eq!(err.to_string(), "\"Alpha\" is already in the catalog");
    }

    #[test]
    fn data_load_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = DataLoadError::Read {
            path: "movies.json".to_string(),
            source: io,
        };

        assert!(err.to_string().contains("movies.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

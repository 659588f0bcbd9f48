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

//! Startup movie data.
//!
//! The initial catalog is read from a JSON document of the form
//! `{ "movies": [ { "title", "year", "description", "img" }, ... ] }`.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{error::DataLoadError, model::MovieRecord};

#[derive(Deserialize)]
struct MovieDocument {
    #[serde(default)]
    movies: Vec<MovieRecord>,
}

/// Reads and parses the movie data file.
///
/// # Errors
///
/// Returns [`DataLoadError::Read`] if the file cannot be read and
/// [`DataLoadError::Parse`] if it is not a valid movie document.
pub(crate) fn fetch_movies(path: &Path) -> Result<Vec<MovieRecord>, DataLoadError> {
    let text = fs::read_to_string(path).map_err(|source| DataLoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let document: MovieDocument =
        serde_json::from_str(&text).map_err(|source| DataLoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    Ok(document.movies)
}

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

//! Movie catalog management.
//!
//! This module provides the in-memory catalog for the current session. The
//! catalog keeps insertion order and only grows by appending; the one
//! exception is a wholesale replacement when a stored snapshot is loaded.

use crate::{
    error::CatalogError,
    model::{MovieDraft, MovieRecord},
};

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self { records: vec![] }
    }

    pub(crate) fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive title lookup.
    pub(crate) fn contains_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.records.iter().any(|r| r.title.to_lowercase() == title)
    }

    /// Replaces every record, used when a load completes.
    pub(crate) fn replace_all(&mut self, records: Vec<MovieRecord>) {
        self.records = records;
    }

    /// Validates a draft and appends it to the end of the catalog.
    ///
    /// Checks run in order: the title must be present, must not collide
    /// (case-insensitively) with an existing title, and the year must parse
    /// as an integer. The caller is responsible for persisting a snapshot
    /// after a successful add.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::MissingTitle`] if the title is blank.
    /// * [`CatalogError::DuplicateTitle`] if the title already exists.
    /// * [`CatalogError::MalformedYear`] if the year is not an integer.
    pub(crate) fn add_movie(&mut self, draft: &MovieDraft) -> Result<&MovieRecord, CatalogError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(CatalogError::MissingTitle);
        }

        if self.contains_title(title) {
            return Err(CatalogError::DuplicateTitle(title.to_string()));
        }

        let year = draft
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| CatalogError::MalformedYear(draft.year.trim().to_string()))?;

        self.records.push(MovieRecord::new(
            title,
            draft.description.trim(),
            year,
            draft.img.trim(),
        ));

        // Just pushed, so there is a last element
        Ok(&self.records[self.records.len() - 1])
    }
}

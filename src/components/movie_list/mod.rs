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

//! Movie card grid.
//!
//! Shows one page of movies as a grid of cards and tracks which card is
//! highlighted. Page changes are reported as actions, since the page number
//! belongs to the view state.

mod event;
mod render;

/// Cards per row; with [`crate::model::paginate::PAGE_SIZE`] this gives five
/// rows.
pub(crate) const GRID_COLUMNS: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MovieListAction {
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
}

pub(crate) struct MovieList {
    selected: usize,
}

impl MovieList {
    pub(crate) fn new() -> Self {
        Self { selected: 0 }
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn reset_selection(&mut self) {
        self.selected = 0;
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 >= len { 0 } else { self.selected + 1 };
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 || self.selected >= len {
            len - 1
        } else {
            self.selected - 1
        };
    }
}

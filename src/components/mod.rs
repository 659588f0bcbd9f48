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

//! Reusable interactive UI components.
//!
//! Each component keeps its own widget state, translates key events into an
//! optional component action, and knows how to draw itself. Components never
//! touch the catalog directly; the event handlers act on their actions.

mod add_form;
mod movie_list;
mod search;
mod year_filter;

pub(crate) use add_form::{AddForm, AddFormAction};
pub(crate) use movie_list::{MovieList, MovieListAction};
pub(crate) use search::{SearchAction, SearchBar};
pub(crate) use year_filter::YearSelector;

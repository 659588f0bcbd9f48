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

//! Search box for the list view.
//!
//! The search box filters the list as the user types. It only receives key
//! events while active.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Changed(String),
}

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    pub(crate) is_active: bool,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: false,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Replaces the text without going through key events.
    pub(crate) fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }
}

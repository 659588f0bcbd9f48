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

//! Fragment routing.
//!
//! The application has two views selected by a location fragment: the
//! reserved `add` fragment shows the add form, anything else shows the list.

/// Fragment that selects the add form.
pub(crate) const ADD_FRAGMENT: &str = "add";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Route {
    #[default]
    List,
    AddForm,
}

impl Route {
    /// Resolves a fragment, with or without its leading `#`.
    pub(crate) fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.trim();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

        if fragment == ADD_FRAGMENT {
            Route::AddForm
        } else {
            Route::List
        }
    }

    pub(crate) fn fragment(self) -> &'static str {
        match self {
            Route::List => "",
            Route::AddForm => ADD_FRAGMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_token_selects_form() {
        assert_eq!(Route::from_fragment("add"), Route::AddForm);
        assert_eq!(Route::from_fragment("#add"), Route::AddForm);
        assert_eq!(Route::from_fragment(" #add "), Route::AddForm);
    }

    #[test]
    fn anything_else_selects_list() {
        for fragment in ["", "#", "list", "#ADD", "adds", "#/add"] {
            assert_eq!(Route::from_fragment(fragment), Route::List, "{fragment}");
        }
    }

    #[test]
    fn fragment_round_trips() {
        for route in [Route::List, Route::AddForm] {
            assert_eq!(Route::from_fragment(route.fragment()), route);
        }
    }
}

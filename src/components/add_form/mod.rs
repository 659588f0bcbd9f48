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

//! Add-movie form.
//!
//! Four text fields edited one at a time. Submitting yields a raw
//! [`MovieDraft`]; validation happens in the catalog.

mod event;
mod render;

use tui_input::Input;

use crate::model::MovieDraft;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AddFormAction {
    Submit(MovieDraft),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Description,
    Year,
    ImageUrl,
}

impl FormField {
    pub(crate) const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Year,
        FormField::ImageUrl,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Year => "Year",
            FormField::ImageUrl => "Image URL",
        }
    }
}

pub(crate) struct AddForm {
    inputs: [Input; 4],
    focus: usize,
}

impl AddForm {
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            focus: 0,
        }
    }

    pub(crate) fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub(crate) fn input(&self, field: FormField) -> &Input {
        &self.inputs[field as usize]
    }

    pub(crate) fn draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.input(FormField::Title).value().to_string(),
            description: self.input(FormField::Description).value().to_string(),
            year: self.input(FormField::Year).value().to_string(),
            img: self.input(FormField::ImageUrl).value().to_string(),
        }
    }

    /// Clears every field and returns focus to the title.
    pub(crate) fn reset(&mut self) {
        self.inputs.iter_mut().for_each(Input::reset);
        self.focus = 0;
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    fn focus_previous(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }
}

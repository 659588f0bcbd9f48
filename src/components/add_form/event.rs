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

//! Input handling for the add-movie form.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{AddForm, AddFormAction};

impl AddForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<AddFormAction> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Esc => return Some(AddFormAction::Cancel),
                KeyCode::Enter => return Some(AddFormAction::Submit(self.draft())),
                KeyCode::Tab | KeyCode::Down => {
                    self.focus_next();
                    return None;
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus_previous();
                    return None;
                }
                _ => {}
            }
        }

        // Delegate everything else to the focused field
        self.inputs[self.focus].handle_event(event);
        None
    }
}

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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, including the
//! colors used for movie cards and for each kind of toast notification.

use ratatui::style::Color;

use crate::model::toast::ToastKind;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_year_fg: Color,

    pub(crate) toast_success: Color,
    pub(crate) toast_warning: Color,
    pub(crate) toast_error: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 32),
            accent_colour: Color::Rgb(229, 9, 20),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(230, 230, 230),
            muted_colour: Color::Rgb(140, 140, 150),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(40, 40, 52),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_year_fg: Color::Rgb(250, 189, 47),

            toast_success: Color::Rgb(46, 160, 67),
            toast_warning: Color::Rgb(210, 153, 34),
            toast_error: Color::Rgb(218, 54, 51),
        }
    }

    pub(crate) fn toast_colour(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Added => self.toast_success,
            ToastKind::NoResults | ToastKind::DuplicateTitle | ToastKind::Invalid => {
                self.toast_warning
            }
            ToastKind::Error => self.toast_error,
        }
    }
}

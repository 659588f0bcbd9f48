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

//! Transient notifications.

use std::time::{Duration, Instant};

pub(crate) const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    DuplicateTitle,
    Added,
    NoResults,
    Invalid,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Toast {
    pub(crate) kind: ToastKind,
    pub(crate) message: String,
    expires_at: Instant,
}

impl Toast {
    pub(crate) fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self::shown_at(kind, message, Instant::now())
    }

    pub(crate) fn shown_at(kind: ToastKind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        }
    }

    pub(crate) fn no_results() -> Self {
        Self::new(ToastKind::NoResults, "No movie matches that search")
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_duration() {
        let now = Instant::now();
        let toast = Toast::shown_at(ToastKind::Added, "Movie added", now);

        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::from_secs(2)));
        assert!(toast.is_expired(now + TOAST_DURATION));
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monday-anchored week windows.
//!
//! Weekly caps are enforced per calendar week running Monday through Sunday.
//! Weekday numbering is Sunday-first (Sunday = 0 ... Saturday = 6), so the
//! offset back to Monday is `(index - 1 + 7) mod 7`.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A half-open week `[start, start + 7 days)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The week containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
        }
    }

    /// The Monday opening this week.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The Monday after this week (exclusive bound).
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(7))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether `date` falls inside this week.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end()
    }
}

/// Returns the Monday on or before `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday_index: u32 = date.weekday().num_days_from_sunday();
    let days_since_monday: u32 = (weekday_index + 7 - 1) % 7;

    date.checked_sub_days(Days::new(u64::from(days_since_monday)))
        .unwrap_or(NaiveDate::MIN)
}

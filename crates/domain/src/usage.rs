// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance aggregation.
//!
//! Counts are computed on demand from the attendance snapshot supplied by
//! the caller. Only present attendance charged to the pass is counted.

use crate::types::{AttendanceEvent, Pass};
use crate::week_window::WeekWindow;
use chrono::NaiveDate;

/// Counts present attendance charged to `pass` over its whole life.
#[must_use]
pub fn used_count(pass: &Pass, attendances: &[AttendanceEvent]) -> u32 {
    count(
        attendances
            .iter()
            .filter(|event| event.counts_against(&pass.id)),
    )
}

/// Counts present attendance charged to `pass` within the week containing
/// `reference_date`.
#[must_use]
pub fn used_this_week(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: NaiveDate,
) -> u32 {
    let window: WeekWindow = WeekWindow::containing(reference_date);
    count(
        attendances
            .iter()
            .filter(|event| event.counts_against(&pass.id) && window.contains(event.class_date)),
    )
}

fn count<'a>(events: impl Iterator<Item = &'a AttendanceEvent>) -> u32 {
    u32::try_from(events.count()).unwrap_or(u32::MAX)
}

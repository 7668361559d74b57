// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AttendanceEvent, OwnerId, Pass, PassId, PassType};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A pass valid from Monday 2025-06-16 through Sunday 2025-07-13.
pub fn create_test_pass(pass_type: PassType) -> Pass {
    Pass::new(
        PassId::new("pass-1"),
        OwnerId::new("student-1"),
        pass_type,
        date(2025, 6, 16),
        date(2025, 7, 13),
        pass_type.canonical_classes_per_week().unwrap_or(0),
        pass_type.canonical_total_classes().unwrap_or(0),
    )
}

pub fn attended(class_date: NaiveDate) -> AttendanceEvent {
    AttendanceEvent::present(PassId::new("pass-1"), class_date)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility of a pass for one class occurrence.

use crate::types::{AttendanceEvent, Pass, PassType};
use crate::usage::{used_count, used_this_week};
use chrono::NaiveDate;

/// Decides whether `pass` may be applied to a class held on `class_date`.
///
/// Weekly caps are evaluated over the week containing `class_date`, not the
/// week of the booking. `SingleClass` is a lifetime single use.
#[must_use]
pub fn can_use_for_class(
    pass: &Pass,
    class_date: NaiveDate,
    attendances: &[AttendanceEvent],
) -> bool {
    if !pass.is_active || !pass.covers(class_date) {
        return false;
    }

    match pass.pass_type {
        PassType::SingleClass => used_count(pass, attendances) == 0,
        PassType::FullPass => true,
        PassType::Flexi4Classes
        | PassType::Flexi8Classes
        | PassType::Monthly1Course
        | PassType::Monthly2Courses
        | PassType::Monthly3Courses
        | PassType::Monthly4Courses
        | PassType::Monthly5Courses => pass
            .weekly_cap()
            .is_none_or(|cap| used_this_week(pass, attendances, class_date) < cap),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{OwnerId, PassId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_pass(pass_type: PassType, per_week: u32, total: u32) -> Pass {
        Pass::new(
            PassId::new("p-1"),
            OwnerId::new("s-1"),
            pass_type,
            date(2025, 6, 16),
            date(2025, 7, 13),
            per_week,
            total,
        )
    }

    #[test]
    fn test_outside_window_is_ineligible() {
        let pass = make_pass(PassType::FullPass, 0, 0);
        assert!(!can_use_for_class(&pass, date(2025, 6, 15), &[]));
        assert!(can_use_for_class(&pass, date(2025, 6, 16), &[]));
        assert!(can_use_for_class(&pass, date(2025, 7, 13), &[]));
        assert!(!can_use_for_class(&pass, date(2025, 7, 14), &[]));
    }

    #[test]
    fn test_inactive_is_ineligible() {
        let mut pass = make_pass(PassType::FullPass, 0, 0);
        pass.is_active = false;
        assert!(!can_use_for_class(&pass, date(2025, 6, 20), &[]));
    }

    #[test]
    fn test_flexi4_one_per_week() {
        let pass = make_pass(PassType::Flexi4Classes, 1, 4);
        let attendances = vec![AttendanceEvent::present(
            PassId::new("p-1"),
            date(2025, 6, 17),
        )];
        assert!(!can_use_for_class(&pass, date(2025, 6, 22), &attendances));
        assert!(can_use_for_class(&pass, date(2025, 6, 23), &attendances));
    }

    #[test]
    fn test_absent_attendance_does_not_consume() {
        let pass = make_pass(PassType::Flexi4Classes, 1, 4);
        let attendances = vec![AttendanceEvent::new(
            Some(PassId::new("p-1")),
            date(2025, 6, 17),
            false,
        )];
        assert!(can_use_for_class(&pass, date(2025, 6, 19), &attendances));
    }

    #[test]
    fn test_week_is_taken_from_class_date() {
        let pass = make_pass(PassType::Monthly1Course, 1, 4);
        // Attended the following week already; the earlier week is still open.
        let attendances = vec![AttendanceEvent::present(
            PassId::new("p-1"),
            date(2025, 6, 24),
        )];
        assert!(can_use_for_class(&pass, date(2025, 6, 19), &attendances));
        assert!(!can_use_for_class(&pass, date(2025, 6, 26), &attendances));
    }
}

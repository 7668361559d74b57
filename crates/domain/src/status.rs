// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pass lifecycle status.
//!
//! Status is derived on every call from the pass, the attendance snapshot
//! and a reference date. No transition history is stored.
//!
//! ## Precedence
//!
//! The checks form a strict priority chain; the first match wins:
//!
//! 1. `Inactive` - the administrative switch is off
//! 2. `NotYetStarted` - the reference date precedes `start_date`
//! 3. `Expired` - the reference date follows `end_date`
//! 4. `Exhausted` - the total is used up, or nothing remains this window
//! 5. `Active`
//!
//! A pass that is both used up and past its end date therefore reports
//! `Expired`.

use crate::entitlement::{Entitlement, complete_weeks_remaining, remaining};
use crate::error::DomainError;
use crate::types::{AttendanceEvent, Pass, PassType};
use crate::usage::{used_count, used_this_week};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a pass on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    /// Usable.
    Active,
    /// Switched off by an administrator.
    Inactive,
    /// The validity window has ended.
    Expired,
    /// No classes remain.
    Exhausted,
    /// The validity window has not opened yet.
    NotYetStarted,
}

impl PassStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Expired => "expired",
            Self::Exhausted => "exhausted",
            Self::NotYetStarted => "not_yet_started",
        }
    }
}

impl FromStr for PassStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "expired" => Ok(Self::Expired),
            "exhausted" => Ok(Self::Exhausted),
            "not_yet_started" => Ok(Self::NotYetStarted),
            _ => Err(DomainError::UnknownPassStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `pass` on `reference_date`.
#[must_use]
pub fn classify_status(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: NaiveDate,
) -> PassStatus {
    if !pass.is_active {
        return PassStatus::Inactive;
    }
    if reference_date < pass.start_date {
        return PassStatus::NotYetStarted;
    }
    if reference_date > pass.end_date {
        return PassStatus::Expired;
    }

    let total_used_up: bool = pass.pass_type != PassType::FullPass
        && used_count(pass, attendances) >= pass.total_classes;
    if total_used_up || remaining(pass, attendances, reference_date).is_exhausted() {
        return PassStatus::Exhausted;
    }

    PassStatus::Active
}

/// A read model combining every derived figure for one pass on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// Present attendance charged over the pass's life.
    pub used: u32,
    /// Present attendance charged in the reference week.
    pub used_this_week: u32,
    /// Complete seven-day blocks left, counting the reference date.
    pub weeks_remaining: u32,
    /// Classes still permitted.
    pub remaining: Entitlement,
    /// Lifecycle state.
    pub status: PassStatus,
}

/// Computes a `PassSummary` for `pass` on `reference_date`.
#[must_use]
pub fn summarize(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: NaiveDate,
) -> PassSummary {
    PassSummary {
        used: used_count(pass, attendances),
        used_this_week: used_this_week(pass, attendances, reference_date),
        weeks_remaining: complete_weeks_remaining(pass, reference_date),
        remaining: remaining(pass, attendances, reference_date),
        status: classify_status(pass, attendances, reference_date),
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

    fn present(y: i32, m: u32, d: u32) -> AttendanceEvent {
        AttendanceEvent::present(PassId::new("p-1"), date(y, m, d))
    }

    #[test]
    fn test_inactive_overrides_everything() {
        let mut pass = make_pass(PassType::Flexi4Classes, 1, 4);
        pass.is_active = false;
        let used: Vec<AttendanceEvent> = (0..4).map(|_| present(2025, 6, 17)).collect();

        for day in [date(2025, 6, 1), date(2025, 6, 20), date(2025, 8, 1)] {
            assert_eq!(classify_status(&pass, &[], day), PassStatus::Inactive);
            assert_eq!(classify_status(&pass, &used, day), PassStatus::Inactive);
        }
    }

    #[test]
    fn test_date_window_states() {
        let pass = make_pass(PassType::Monthly1Course, 1, 4);
        assert_eq!(
            classify_status(&pass, &[], date(2025, 6, 15)),
            PassStatus::NotYetStarted
        );
        assert_eq!(
            classify_status(&pass, &[], date(2025, 6, 16)),
            PassStatus::Active
        );
        assert_eq!(
            classify_status(&pass, &[], date(2025, 7, 14)),
            PassStatus::Expired
        );
    }

    #[test]
    fn test_used_up_and_past_end_reports_expired() {
        let pass = make_pass(PassType::Flexi4Classes, 1, 4);
        let attendances = vec![
            present(2025, 6, 16),
            present(2025, 6, 23),
            present(2025, 6, 30),
            present(2025, 7, 7),
        ];
        assert_eq!(
            classify_status(&pass, &attendances, date(2025, 7, 10)),
            PassStatus::Exhausted
        );
        assert_eq!(
            classify_status(&pass, &attendances, date(2025, 7, 20)),
            PassStatus::Expired
        );
    }

    #[test]
    fn test_weekly_cap_in_final_week_exhausts() {
        // Last week, cap already used, no complete week left: nothing remains.
        let pass = make_pass(PassType::Monthly1Course, 1, 4);
        let attendances = vec![present(2025, 7, 8)];
        assert_eq!(
            classify_status(&pass, &attendances, date(2025, 7, 9)),
            PassStatus::Exhausted
        );
    }

    #[test]
    fn test_full_pass_never_exhausts() {
        let pass = make_pass(PassType::FullPass, 0, 0);
        let attendances: Vec<AttendanceEvent> = (0..50).map(|_| present(2025, 6, 18)).collect();
        assert_eq!(
            classify_status(&pass, &attendances, date(2025, 6, 18)),
            PassStatus::Active
        );
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            PassStatus::Active,
            PassStatus::Inactive,
            PassStatus::Expired,
            PassStatus::Exhausted,
            PassStatus::NotYetStarted,
        ] {
            assert_eq!(status.as_str().parse::<PassStatus>().unwrap(), status);
        }
        assert!("paused".parse::<PassStatus>().is_err());
    }

    #[test]
    fn test_summary() {
        let pass = make_pass(PassType::Monthly2Courses, 2, 8);
        let attendances = vec![present(2025, 6, 16), present(2025, 6, 24)];
        let summary = summarize(&pass, &attendances, date(2025, 6, 25));

        assert_eq!(summary.used, 2);
        assert_eq!(summary.used_this_week, 1);
        assert_eq!(summary.weeks_remaining, 2);
        assert_eq!(summary.remaining, Entitlement::Count(5));
        assert_eq!(summary.status, PassStatus::Active);
    }
}

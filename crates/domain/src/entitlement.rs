// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remaining entitlement calculation.
//!
//! Remaining classes are never just `total - used`. Unused weekly allowance
//! cannot be pulled forward from future weeks, so the result is also bounded
//! by what is left of this week's cap plus one full cap per complete week
//! still ahead.
//!
//! ## Invariants
//!
//! - Outside the validity window, or on an inactive pass, nothing remains
//! - For every product except `FullPass`, the result never exceeds `total_classes`
//! - More recorded usage never increases the result

use crate::types::{AttendanceEvent, Pass, PassType};
use crate::usage::{used_count, used_this_week};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many classes a pass still permits.
///
/// Variant order matters: any `Count` compares below `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entitlement {
    /// A bounded number of classes.
    Count(u32),
    /// No cap binds.
    Unbounded,
}

impl Entitlement {
    /// Nothing remains.
    pub const NONE: Self = Self::Count(0);

    /// Whether no classes remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Count(0))
    }

    /// The bounded count, or `None` when unbounded.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Unbounded => None,
        }
    }
}

impl std::fmt::Display for Entitlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unlimited"),
        }
    }
}

/// Computes how many classes `pass` still permits on `reference_date`.
///
/// # Arguments
///
/// * `pass` - The pass being evaluated
/// * `attendances` - The complete attendance snapshot for the pass
/// * `reference_date` - The day the entitlement is evaluated for
#[must_use]
pub fn remaining(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: NaiveDate,
) -> Entitlement {
    if !pass.is_active || !pass.covers(reference_date) {
        return Entitlement::NONE;
    }

    match pass.pass_type {
        PassType::SingleClass => {
            if used_count(pass, attendances) == 0 {
                Entitlement::Count(1)
            } else {
                Entitlement::NONE
            }
        }
        PassType::FullPass => Entitlement::Unbounded,
        PassType::Flexi4Classes
        | PassType::Flexi8Classes
        | PassType::Monthly1Course
        | PassType::Monthly2Courses
        | PassType::Monthly3Courses
        | PassType::Monthly4Courses
        | PassType::Monthly5Courses => match pass.weekly_cap() {
            Some(cap) => capped_remaining(pass, attendances, reference_date, cap),
            None => Entitlement::Unbounded,
        },
    }
}

/// Counts the complete seven-day blocks between `reference_date` and the end
/// of the pass, counting `reference_date` itself.
#[must_use]
pub fn complete_weeks_remaining(pass: &Pass, reference_date: NaiveDate) -> u32 {
    if reference_date > pass.end_date {
        return 0;
    }

    let days_inclusive: i64 = (pass.end_date - reference_date).num_days() + 1;
    u32::try_from(days_inclusive / 7).unwrap_or(u32::MAX)
}

fn capped_remaining(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: NaiveDate,
    weekly_cap: u32,
) -> Entitlement {
    let remaining_from_total: u32 = pass
        .total_classes
        .saturating_sub(used_count(pass, attendances));
    if remaining_from_total == 0 {
        return Entitlement::NONE;
    }

    let weeks_remaining: u32 = complete_weeks_remaining(pass, reference_date);
    let possible_this_week: u32 =
        weekly_cap.saturating_sub(used_this_week(pass, attendances, reference_date));
    let max_possible: u32 =
        possible_this_week.saturating_add(weeks_remaining.saturating_mul(weekly_cap));

    Entitlement::Count(remaining_from_total.min(max_possible))
}

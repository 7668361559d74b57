// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pass entitlement engine.
//!
//! Every function here is a pure transformation of a pass, an attendance
//! snapshot supplied by the caller, and a reference date. Nothing is cached
//! and nothing is mutated; callers own consistency of the snapshot.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod entitlement;
mod error;
mod policy;
mod status;
mod types;
mod usage;
mod validation;
mod week_window;

#[cfg(test)]
mod tests;

pub use eligibility::can_use_for_class;
pub use entitlement::{Entitlement, complete_weeks_remaining, remaining};
pub use error::{DomainError, IssuanceError};
pub use policy::IssuancePolicy;
pub use status::{PassStatus, PassSummary, classify_status, summarize};
pub use types::{AttendanceEvent, OwnerId, Pass, PassId, PassType, ScheduleSlotId};
pub use usage::{used_count, used_this_week};
pub use validation::{validate_for_issuance, validate_purchase_request};
pub use week_window::{WeekWindow, week_start};

/// Computes the classes `pass` still permits on `reference_date`.
#[must_use]
pub fn compute_remaining(
    pass: &Pass,
    attendances: &[AttendanceEvent],
    reference_date: chrono::NaiveDate,
) -> Entitlement {
    remaining(pass, attendances, reference_date)
}

/// Whether `pass` may be applied to a class on `class_date`.
#[must_use]
pub fn can_use(
    pass: &Pass,
    class_date: chrono::NaiveDate,
    attendances: &[AttendanceEvent],
) -> bool {
    can_use_for_class(pass, class_date, attendances)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::IssuanceError;
use crate::policy::IssuancePolicy;
use crate::types::{Pass, PassType};
use chrono::{Datelike, NaiveDate, Weekday};

/// Validates that a newly constructed pass is internally consistent.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `pass` - The candidate pass
/// * `today` - The studio's current calendar date
/// * `policy` - The issuance policy in force
///
/// # Errors
///
/// Returns the first rule violated, checked in this order:
/// - `InvalidDateRange` if `end_date` is not after `start_date`
/// - `StartDateInPast` if the pass starts before the tolerated earliest date
/// - `WeeklyCapMismatch` / `TotalClassesMismatch` if the counts do not match the product
/// - `ValidityPeriodMismatch` if a fixed-window product does not span one full period
pub fn validate_for_issuance(
    pass: &Pass,
    today: NaiveDate,
    policy: &IssuancePolicy,
) -> Result<(), IssuanceError> {
    // Rule: end date strictly after start date
    if pass.end_date <= pass.start_date {
        return Err(IssuanceError::InvalidDateRange {
            start_date: pass.start_date,
            end_date: pass.end_date,
        });
    }

    validate_start_date(pass.start_date, today, policy)?;
    validate_counts(pass)?;

    // Rule: fixed-window products span exactly one validity period
    if pass.pass_type.has_fixed_window() {
        let window_days: i64 = (pass.end_date - pass.start_date).num_days() + 1;
        if window_days != i64::from(policy.validity_days) {
            return Err(IssuanceError::ValidityPeriodMismatch {
                pass_type: pass.pass_type,
                expected: policy.validity_days,
                actual: window_days,
            });
        }
    }

    Ok(())
}

/// Validates a purchase request's weekly slot selection against its start date.
///
/// `FullPass` is not tied to a weekly schedule, so only the start date is
/// checked for it.
///
/// # Arguments
///
/// * `pass_type` - The product being purchased
/// * `start_date` - The requested first day of the pass
/// * `selected_slot_weekdays` - The weekday of each selected recurring class
/// * `today` - The studio's current calendar date
/// * `policy` - The issuance policy in force
///
/// # Errors
///
/// Returns an error if:
/// - The start date is too far in the past
/// - The number of selected slots differs from the product's weekly classes
/// - No selected slot runs on the start date's weekday
pub fn validate_purchase_request(
    pass_type: PassType,
    start_date: NaiveDate,
    selected_slot_weekdays: &[Weekday],
    today: NaiveDate,
    policy: &IssuancePolicy,
) -> Result<(), IssuanceError> {
    validate_start_date(start_date, today, policy)?;

    let Some(expected) = pass_type.canonical_classes_per_week() else {
        return Ok(());
    };

    // Rule: one selected slot per weekly class
    let matches_count: bool = usize::try_from(expected)
        .is_ok_and(|expected| selected_slot_weekdays.len() == expected);
    if !matches_count {
        return Err(IssuanceError::SelectionCountMismatch {
            pass_type,
            expected,
            actual: selected_slot_weekdays.len(),
        });
    }

    // Rule: the pass cannot start on a day with no selected class
    let weekday: Weekday = start_date.weekday();
    if !selected_slot_weekdays.contains(&weekday) {
        return Err(IssuanceError::StartDateWeekdayMismatch {
            start_date,
            weekday,
        });
    }

    Ok(())
}

/// Rejects start dates more than the tolerated number of days in the past.
fn validate_start_date(
    start_date: NaiveDate,
    today: NaiveDate,
    policy: &IssuancePolicy,
) -> Result<(), IssuanceError> {
    let earliest: NaiveDate = policy.earliest_start(today);
    if start_date < earliest {
        return Err(IssuanceError::StartDateInPast {
            start_date,
            earliest,
        });
    }
    Ok(())
}

/// Checks the weekly cap and total against the product's canonical values.
fn validate_counts(pass: &Pass) -> Result<(), IssuanceError> {
    let (Some(expected_per_week), Some(expected_total)) = (
        pass.pass_type.canonical_classes_per_week(),
        pass.pass_type.canonical_total_classes(),
    ) else {
        // FullPass carries no count constraints
        return Ok(());
    };

    if pass.classes_per_week != expected_per_week {
        return Err(IssuanceError::WeeklyCapMismatch {
            pass_type: pass.pass_type,
            expected: expected_per_week,
            actual: pass.classes_per_week,
        });
    }

    if pass.total_classes != expected_total {
        return Err(IssuanceError::TotalClassesMismatch {
            pass_type: pass.pass_type,
            expected: expected_total,
            actual: pass.total_classes,
        });
    }

    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{PassId, PassType};
use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Reasons a pass (or a purchase request for one) is rejected at issuance.
///
/// Each variant is a reason code; `code()` returns its stable name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssuanceError {
    /// The end date does not fall after the start date.
    #[error("Pass end date {end_date} must be after start date {start_date}")]
    InvalidDateRange {
        /// The proposed start date.
        start_date: NaiveDate,
        /// The proposed end date.
        end_date: NaiveDate,
    },
    /// The weekly cap does not match the product.
    #[error("{pass_type} passes allow {expected} classes per week, got {actual}")]
    WeeklyCapMismatch {
        /// The product being issued.
        pass_type: PassType,
        /// The canonical weekly cap.
        expected: u32,
        /// The proposed weekly cap.
        actual: u32,
    },
    /// The total class count does not match the product.
    #[error("{pass_type} passes include {expected} classes in total, got {actual}")]
    TotalClassesMismatch {
        /// The product being issued.
        pass_type: PassType,
        /// The canonical total.
        expected: u32,
        /// The proposed total.
        actual: u32,
    },
    /// The validity window is not exactly one period long.
    #[error("{pass_type} passes must be valid for exactly {expected} days, got {actual}")]
    ValidityPeriodMismatch {
        /// The product being issued.
        pass_type: PassType,
        /// The required window length in days.
        expected: u32,
        /// The proposed window length in days.
        actual: i64,
    },
    /// The number of selected weekly slots does not match the weekly cap.
    #[error("{pass_type} passes require {expected} weekly classes to be selected, got {actual}")]
    SelectionCountMismatch {
        /// The product being purchased.
        pass_type: PassType,
        /// The required number of slots.
        expected: u32,
        /// The number of slots selected.
        actual: usize,
    },
    /// No selected slot takes place on the start date's weekday.
    #[error("Start date {start_date} is a {weekday}, but no selected class runs on that day")]
    StartDateWeekdayMismatch {
        /// The proposed start date.
        start_date: NaiveDate,
        /// The weekday of the start date.
        weekday: Weekday,
    },
    /// The start date lies too far in the past.
    #[error("Start date {start_date} is before the earliest allowed date {earliest}")]
    StartDateInPast {
        /// The proposed start date.
        start_date: NaiveDate,
        /// The earliest start date accepted today.
        earliest: NaiveDate,
    },
}

impl IssuanceError {
    /// Returns the reason code for this rejection.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "InvalidDateRange",
            Self::WeeklyCapMismatch { .. } => "WeeklyCapMismatch",
            Self::TotalClassesMismatch { .. } => "TotalClassesMismatch",
            Self::ValidityPeriodMismatch { .. } => "ValidityPeriodMismatch",
            Self::SelectionCountMismatch { .. } => "SelectionCountMismatch",
            Self::StartDateWeekdayMismatch { .. } => "StartDateWeekdayMismatch",
            Self::StartDateInPast { .. } => "StartDateInPast",
        }
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A pass failed issuance validation.
    #[error(transparent)]
    Issuance(#[from] IssuanceError),
    /// A pass with this identifier already exists.
    #[error("Pass '{0}' already exists")]
    DuplicatePass(PassId),
    /// No pass with this identifier exists.
    #[error("Pass '{0}' not found")]
    PassNotFound(PassId),
    /// An extension must move the end date later.
    #[error("New end date {requested} for pass '{pass_id}' is not after the current end date {current}")]
    EndDateNotExtended {
        /// The pass being extended.
        pass_id: PassId,
        /// The current end date.
        current: NaiveDate,
        /// The requested end date.
        requested: NaiveDate,
    },
    /// Classes cannot be added to this pass.
    #[error("Cannot add {amount} classes to {pass_type} pass '{pass_id}'")]
    InvalidClassTopUp {
        /// The pass being topped up.
        pass_id: PassId,
        /// The product of that pass.
        pass_type: PassType,
        /// The requested amount.
        amount: u32,
    },
    /// The pass is already in the requested activation state.
    #[error("Pass '{pass_id}' already has is_active = {is_active}")]
    ActivationUnchanged {
        /// The pass being toggled.
        pass_id: PassId,
        /// The current (and requested) activation state.
        is_active: bool,
    },
    /// Unrecognized pass type name.
    #[error("Unknown pass type: {0}")]
    UnknownPassType(String),
    /// Unrecognized pass status name.
    #[error("Unknown pass status: {0}")]
    UnknownPassStatus(String),
    /// Unrecognized IANA timezone name.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

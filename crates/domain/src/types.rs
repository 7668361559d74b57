// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::policy::IssuancePolicy;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque identifier of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassId(String);

impl PassId {
    /// Creates a new `PassId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of the student owning a pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a new `OwnerId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a recurring weekly schedule slot (a class at a fixed weekday).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleSlotId(i64);

impl ScheduleSlotId {
    /// Creates a new `ScheduleSlotId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// The closed set of pass products a studio sells.
///
/// Every calculator matches on this exhaustively; adding a product means
/// revisiting each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    /// One class, used once.
    SingleClass,
    /// One fixed weekly class for four weeks.
    #[serde(rename = "monthly_1_course")]
    Monthly1Course,
    /// Two fixed weekly classes for four weeks.
    #[serde(rename = "monthly_2_courses")]
    Monthly2Courses,
    /// Three fixed weekly classes for four weeks.
    #[serde(rename = "monthly_3_courses")]
    Monthly3Courses,
    /// Four fixed weekly classes for four weeks.
    #[serde(rename = "monthly_4_courses")]
    Monthly4Courses,
    /// Five fixed weekly classes for four weeks.
    #[serde(rename = "monthly_5_courses")]
    Monthly5Courses,
    /// Four classes of any kind, at most one per week.
    #[serde(rename = "flexi_4_classes")]
    Flexi4Classes,
    /// Eight classes of any kind, at most two per week.
    #[serde(rename = "flexi_8_classes")]
    Flexi8Classes,
    /// Unlimited classes within the validity window.
    FullPass,
}

impl PassType {
    /// All pass types, in catalogue order.
    pub const ALL: [Self; 9] = [
        Self::SingleClass,
        Self::Monthly1Course,
        Self::Monthly2Courses,
        Self::Monthly3Courses,
        Self::Monthly4Courses,
        Self::Monthly5Courses,
        Self::Flexi4Classes,
        Self::Flexi8Classes,
        Self::FullPass,
    ];

    /// Returns the stable string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleClass => "single_class",
            Self::Monthly1Course => "monthly_1_course",
            Self::Monthly2Courses => "monthly_2_courses",
            Self::Monthly3Courses => "monthly_3_courses",
            Self::Monthly4Courses => "monthly_4_courses",
            Self::Monthly5Courses => "monthly_5_courses",
            Self::Flexi4Classes => "flexi_4_classes",
            Self::Flexi8Classes => "flexi_8_classes",
            Self::FullPass => "full_pass",
        }
    }

    /// The weekly class count this product is sold with.
    ///
    /// `None` for `FullPass`, which has no weekly cap.
    #[must_use]
    pub const fn canonical_classes_per_week(&self) -> Option<u32> {
        match self {
            Self::SingleClass | Self::Monthly1Course | Self::Flexi4Classes => Some(1),
            Self::Monthly2Courses | Self::Flexi8Classes => Some(2),
            Self::Monthly3Courses => Some(3),
            Self::Monthly4Courses => Some(4),
            Self::Monthly5Courses => Some(5),
            Self::FullPass => None,
        }
    }

    /// The total class count this product is sold with.
    #[must_use]
    pub const fn canonical_total_classes(&self) -> Option<u32> {
        match self {
            Self::SingleClass => Some(1),
            Self::FullPass => None,
            Self::Monthly1Course
            | Self::Monthly2Courses
            | Self::Monthly3Courses
            | Self::Monthly4Courses
            | Self::Monthly5Courses
            | Self::Flexi4Classes
            | Self::Flexi8Classes => match self.canonical_classes_per_week() {
                Some(per_week) => Some(per_week * 4),
                None => None,
            },
        }
    }

    /// Whether the product must span exactly one validity period (four weeks).
    #[must_use]
    pub const fn has_fixed_window(&self) -> bool {
        self.is_tiered_monthly() || matches!(self, Self::Flexi4Classes | Self::Flexi8Classes)
    }

    /// Whether this is one of the tiered monthly products.
    #[must_use]
    pub const fn is_tiered_monthly(&self) -> bool {
        matches!(
            self,
            Self::Monthly1Course
                | Self::Monthly2Courses
                | Self::Monthly3Courses
                | Self::Monthly4Courses
                | Self::Monthly5Courses
        )
    }
}

impl FromStr for PassType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pass_type| pass_type.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPassType(s.to_string()))
    }
}

impl std::fmt::Display for PassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchased attendance entitlement.
///
/// `start_date` and `end_date` are both inclusive. After issuance only
/// `end_date`, `is_active` and (additively) `total_classes` change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    /// The pass identifier.
    pub id: PassId,
    /// The student owning the pass.
    pub owner_id: OwnerId,
    /// First day the pass may be used.
    pub start_date: NaiveDate,
    /// Last day the pass may be used.
    pub end_date: NaiveDate,
    /// The product this pass was sold as.
    pub pass_type: PassType,
    /// Weekly usage cap. Ignored for `FullPass`.
    pub classes_per_week: u32,
    /// Total classes the pass entitles. Ignored for `FullPass`.
    pub total_classes: u32,
    /// Administrative switch, independent of the date window.
    pub is_active: bool,
}

impl Pass {
    /// Creates a new active `Pass` from raw fields.
    ///
    /// No consistency checks are made here; see `validate_for_issuance`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: PassId,
        owner_id: OwnerId,
        pass_type: PassType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        classes_per_week: u32,
        total_classes: u32,
    ) -> Self {
        Self {
            id,
            owner_id,
            start_date,
            end_date,
            pass_type,
            classes_per_week,
            total_classes,
            is_active: true,
        }
    }

    /// Builds a pass the way the purchase workflow does: canonical counts for
    /// the product and a window of `policy.validity_days` starting at `start_date`.
    ///
    /// `FullPass` gets zero for both counts since neither is consulted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the end date cannot be
    /// represented.
    pub fn from_purchase(
        id: PassId,
        owner_id: OwnerId,
        pass_type: PassType,
        start_date: NaiveDate,
        policy: &IssuancePolicy,
    ) -> Result<Self, DomainError> {
        let span: u64 = u64::from(policy.validity_days.saturating_sub(1));
        let end_date: NaiveDate = start_date
            .checked_add_days(Days::new(span))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {span} days to {start_date}"),
            })?;

        Ok(Self::new(
            id,
            owner_id,
            pass_type,
            start_date,
            end_date,
            pass_type.canonical_classes_per_week().unwrap_or(0),
            pass_type.canonical_total_classes().unwrap_or(0),
        ))
    }

    /// Whether `date` falls inside the inclusive validity window.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// The number of classes this pass may be used for in one week.
    ///
    /// Flexi products carry a fixed cap regardless of `classes_per_week`.
    /// `None` means no weekly cap applies.
    #[must_use]
    pub const fn weekly_cap(&self) -> Option<u32> {
        match self.pass_type {
            PassType::Flexi4Classes => Some(1),
            PassType::Flexi8Classes => Some(2),
            PassType::FullPass => None,
            PassType::SingleClass
            | PassType::Monthly1Course
            | PassType::Monthly2Courses
            | PassType::Monthly3Courses
            | PassType::Monthly4Courses
            | PassType::Monthly5Courses => Some(self.classes_per_week),
        }
    }
}

/// One recorded class attendance.
///
/// Attendance records are append-only facts; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The pass used for this class, if any.
    pub pass_id: Option<PassId>,
    /// The date of the class occurrence.
    pub class_date: NaiveDate,
    /// Whether the student actually attended.
    pub was_present: bool,
}

impl AttendanceEvent {
    /// Creates a new `AttendanceEvent`.
    #[must_use]
    pub const fn new(pass_id: Option<PassId>, class_date: NaiveDate, was_present: bool) -> Self {
        Self {
            pass_id,
            class_date,
            was_present,
        }
    }

    /// A present attendance charged to `pass_id`.
    #[must_use]
    pub const fn present(pass_id: PassId, class_date: NaiveDate) -> Self {
        Self::new(Some(pass_id), class_date, true)
    }

    /// Whether this event consumes entitlement from `pass_id`.
    #[must_use]
    pub fn counts_against(&self, pass_id: &PassId) -> bool {
        self.was_present && self.pass_id.as_ref() == Some(pass_id)
    }
}

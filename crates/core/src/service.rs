// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator-facing entry points.
//!
//! `PassService` pulls the attendance snapshot or schedule weekdays it needs
//! from the host's data sources, then delegates to the pure engine. Each call
//! reads its snapshot exactly once and caches nothing.

use crate::apply::apply;
use crate::command::Command;
use crate::error::{CoreError, SourceError};
use crate::state::{State, TransitionResult};
use chrono::{NaiveDate, Weekday};
use studio_pass_audit::{Actor, Cause};
use studio_pass_domain::{
    AttendanceEvent, Entitlement, IssuancePolicy, Pass, PassId, PassStatus, PassSummary, PassType,
    ScheduleSlotId, can_use_for_class, classify_status, remaining, summarize,
    validate_purchase_request,
};
use tracing::{debug, info, warn};

/// Supplies the attendance recorded against a pass.
///
/// Implementations must return the complete set; partial or paginated
/// results make the entitlement math wrong.
pub trait AttendanceSource {
    /// Returns every attendance event charged to `pass_id`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the attendance store cannot be read.
    fn attendance_for_pass(&self, pass_id: &PassId) -> Result<Vec<AttendanceEvent>, SourceError>;
}

/// Supplies the weekday of recurring schedule slots.
pub trait ScheduleSource {
    /// Returns the weekday of each slot, in the order requested.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if a slot is unknown or the schedule cannot be read.
    fn slot_weekdays(&self, slots: &[ScheduleSlotId]) -> Result<Vec<Weekday>, SourceError>;
}

/// Entitlement queries and pass commands backed by the host's data sources.
#[derive(Debug, Clone)]
pub struct PassService<A, S> {
    attendance: A,
    schedule: S,
    policy: IssuancePolicy,
}

impl<A, S> PassService<A, S>
where
    A: AttendanceSource,
    S: ScheduleSource,
{
    /// Creates a new `PassService`.
    #[must_use]
    pub const fn new(attendance: A, schedule: S, policy: IssuancePolicy) -> Self {
        Self {
            attendance,
            schedule,
            policy,
        }
    }

    /// The issuance policy in force.
    #[must_use]
    pub const fn policy(&self) -> &IssuancePolicy {
        &self.policy
    }

    /// Classes `pass` still permits on `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Source` if attendance cannot be read.
    pub fn remaining(
        &self,
        pass: &Pass,
        reference_date: NaiveDate,
    ) -> Result<Entitlement, CoreError> {
        let attendances: Vec<AttendanceEvent> = self.attendance.attendance_for_pass(&pass.id)?;
        let result: Entitlement = remaining(pass, &attendances, reference_date);
        debug!(
            pass_id = %pass.id,
            %reference_date,
            remaining = %result,
            "Computed remaining entitlement"
        );
        Ok(result)
    }

    /// Whether `pass` may be used for a class on `class_date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Source` if attendance cannot be read.
    pub fn can_use(&self, pass: &Pass, class_date: NaiveDate) -> Result<bool, CoreError> {
        let attendances: Vec<AttendanceEvent> = self.attendance.attendance_for_pass(&pass.id)?;
        let eligible: bool = can_use_for_class(pass, class_date, &attendances);
        debug!(pass_id = %pass.id, %class_date, eligible, "Checked class eligibility");
        Ok(eligible)
    }

    /// Lifecycle status of `pass` on `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Source` if attendance cannot be read.
    pub fn status(&self, pass: &Pass, reference_date: NaiveDate) -> Result<PassStatus, CoreError> {
        let attendances: Vec<AttendanceEvent> = self.attendance.attendance_for_pass(&pass.id)?;
        let status: PassStatus = classify_status(pass, &attendances, reference_date);
        debug!(pass_id = %pass.id, %reference_date, %status, "Classified pass status");
        Ok(status)
    }

    /// Every derived figure for `pass` on `reference_date`, from one snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Source` if attendance cannot be read.
    pub fn summarize(
        &self,
        pass: &Pass,
        reference_date: NaiveDate,
    ) -> Result<PassSummary, CoreError> {
        let attendances: Vec<AttendanceEvent> = self.attendance.attendance_for_pass(&pass.id)?;
        Ok(summarize(pass, &attendances, reference_date))
    }

    /// Resolves the selected slots and validates a purchase, producing the
    /// command to apply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schedule source cannot resolve the slots
    /// - The purchase request fails validation
    pub fn validate_purchase(
        &self,
        pass_id: PassId,
        pass_type: PassType,
        start_date: NaiveDate,
        slots: &[ScheduleSlotId],
        today: NaiveDate,
    ) -> Result<Command, CoreError> {
        let slot_weekdays: Vec<Weekday> = self.schedule.slot_weekdays(slots)?;

        if let Err(err) =
            validate_purchase_request(pass_type, start_date, &slot_weekdays, today, &self.policy)
        {
            warn!(
                %pass_id,
                %pass_type,
                %start_date,
                reason = err.code(),
                "Rejected purchase request: {err}"
            );
            return Err(err.into());
        }

        Ok(Command::PurchasePass {
            pass_id,
            pass_type,
            start_date,
            slot_weekdays,
        })
    }

    /// Applies `command` under this service's policy, logging the outcome.
    ///
    /// # Errors
    ///
    /// Returns the `CoreError` produced by `apply`.
    pub fn execute(
        &self,
        state: &State,
        command: Command,
        actor: Actor,
        cause: Cause,
        today: NaiveDate,
    ) -> Result<TransitionResult, CoreError> {
        let action: &'static str = command.name();

        match apply(state, command, actor, cause, today, &self.policy) {
            Ok(transition) => {
                info!(
                    owner_id = %state.owner_id,
                    pass_id = %transition.audit_event.pass_id,
                    action,
                    "Applied pass command"
                );
                Ok(transition)
            }
            Err(err) => {
                warn!(
                    owner_id = %state.owner_id,
                    action,
                    reason = err.rejection_code().unwrap_or("rule"),
                    "Rejected pass command: {err}"
                );
                Err(err)
            }
        }
    }
}

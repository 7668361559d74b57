// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AttendanceSource, ScheduleSource, SourceError, State};
use chrono::{NaiveDate, Weekday};
use std::collections::HashMap;
use studio_pass_audit::{Actor, Cause};
use studio_pass_domain::{
    AttendanceEvent, IssuancePolicy, OwnerId, Pass, PassId, PassType, ScheduleSlotId,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Monday 2025-06-16, the first day of every test pass.
pub fn today() -> NaiveDate {
    date(2025, 6, 16)
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Front desk request"))
}

pub fn create_test_policy() -> IssuancePolicy {
    IssuancePolicy::default()
}

pub fn create_test_state() -> State {
    State::new(OwnerId::new("student-1"))
}

/// A canonical pass valid from 2025-06-16 through 2025-07-13.
pub fn create_test_pass(id: &str, pass_type: PassType) -> Pass {
    Pass::new(
        PassId::new(id),
        OwnerId::new("student-1"),
        pass_type,
        date(2025, 6, 16),
        date(2025, 7, 13),
        pass_type.canonical_classes_per_week().unwrap_or(0),
        pass_type.canonical_total_classes().unwrap_or(0),
    )
}

/// A state already holding `pass`.
pub fn create_state_with(pass: Pass) -> State {
    let mut state: State = create_test_state();
    state.passes.push(pass);
    state
}

/// Attendance held in memory, filtered by pass on read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendance {
    pub events: Vec<AttendanceEvent>,
}

impl InMemoryAttendance {
    pub fn present_on(pass_id: &str, dates: &[NaiveDate]) -> Self {
        Self {
            events: dates
                .iter()
                .map(|class_date| AttendanceEvent::present(PassId::new(pass_id), *class_date))
                .collect(),
        }
    }
}

impl AttendanceSource for InMemoryAttendance {
    fn attendance_for_pass(&self, pass_id: &PassId) -> Result<Vec<AttendanceEvent>, SourceError> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.pass_id.as_ref() == Some(pass_id))
            .cloned()
            .collect())
    }
}

/// A weekly timetable keyed by slot id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchedule {
    pub slots: HashMap<ScheduleSlotId, Weekday>,
}

impl InMemorySchedule {
    /// Slot 1 runs Mondays, slot 2 Wednesdays, slot 3 Fridays.
    pub fn weekly() -> Self {
        Self {
            slots: HashMap::from([
                (ScheduleSlotId::new(1), Weekday::Mon),
                (ScheduleSlotId::new(2), Weekday::Wed),
                (ScheduleSlotId::new(3), Weekday::Fri),
            ]),
        }
    }
}

impl ScheduleSource for InMemorySchedule {
    fn slot_weekdays(&self, slots: &[ScheduleSlotId]) -> Result<Vec<Weekday>, SourceError> {
        slots
            .iter()
            .map(|slot| {
                self.slots.get(slot).copied().ok_or_else(|| {
                    SourceError::new(
                        String::from("schedule"),
                        format!("unknown slot {}", slot.value()),
                    )
                })
            })
            .collect()
    }
}

/// A source whose backing store is down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl AttendanceSource for Unavailable {
    fn attendance_for_pass(&self, _pass_id: &PassId) -> Result<Vec<AttendanceEvent>, SourceError> {
        Err(SourceError::new(
            String::from("attendance"),
            String::from("connection refused"),
        ))
    }
}

impl ScheduleSource for Unavailable {
    fn slot_weekdays(&self, _slots: &[ScheduleSlotId]) -> Result<Vec<Weekday>, SourceError> {
        Err(SourceError::new(
            String::from("schedule"),
            String::from("connection refused"),
        ))
    }
}

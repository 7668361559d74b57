// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail types for pass mutations.
//!
//! Every successful change to a pass produces exactly one `AuditEvent`,
//! scoped to the owning student and the pass that changed.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use studio_pass_domain::{OwnerId, Pass, PassId};

/// Represents the entity performing an action.
///
/// An actor is a front-desk operator, the student themself, or an automated process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "operator", "student", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, order ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`IssuePass`", "`ExtendEndDate`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The mutable fields of a pass at one point in time.
///
/// An absent pass (before issuance) is recorded as `"absent"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A compact string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Snapshot of a pass that does not exist yet.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("absent"))
    }

    /// Snapshot of the fields of `pass` that may change after issuance.
    #[must_use]
    pub fn of_pass(pass: &Pass) -> Self {
        Self::new(format!(
            "type={} end_date={} total_classes={} is_active={}",
            pass.pass_type, pass.end_date, pass.total_classes, pass.is_active
        ))
    }
}

/// An immutable audit event representing a pass mutation.
///
/// Audit events capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The pass before and after the change
/// - The student and pass the change is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The pass before the change.
    pub before: StateSnapshot,
    /// The pass after the change.
    pub after: StateSnapshot,
    /// The student owning the pass.
    pub owner_id: OwnerId,
    /// The pass that changed.
    pub pass_id: PassId,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        owner_id: OwnerId,
        pass_id: PassId,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            owner_id,
            pass_id,
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use studio_pass_audit::AuditEvent;
use studio_pass_domain::{OwnerId, Pass, PassId};

/// All passes held by one student.
///
/// State is scoped to a single owner. Passes are never removed here;
/// deletion is a persistence concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The student this state is scoped to.
    pub owner_id: OwnerId,
    /// Every pass issued to the student, in issuance order.
    pub passes: Vec<Pass>,
}

impl State {
    /// Creates a new empty state for a student.
    #[must_use]
    pub const fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            passes: Vec::new(),
        }
    }

    /// Looks up a pass by identifier.
    #[must_use]
    pub fn pass(&self, pass_id: &PassId) -> Option<&Pass> {
        self.passes.iter().find(|pass| &pass.id == pass_id)
    }

    /// Whether a pass with this identifier exists.
    #[must_use]
    pub fn has_pass(&self, pass_id: &PassId) -> bool {
        self.pass(pass_id).is_some()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

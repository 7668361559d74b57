// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use studio_pass_domain::{DomainError, IssuanceError, OwnerId};
use thiserror::Error;

/// A collaborator failed to supply data the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{collaborator} unavailable: {message}")]
pub struct SourceError {
    /// Which collaborator failed (e.g. "attendance", "schedule").
    pub collaborator: String,
    /// What went wrong.
    pub message: String,
}

impl SourceError {
    /// Creates a new `SourceError`.
    #[must_use]
    pub const fn new(collaborator: String, message: String) -> Self {
        Self {
            collaborator,
            message,
        }
    }
}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A collaborator could not supply attendance or schedule data.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The pass belongs to a different student than the state being changed.
    #[error("Pass belongs to '{pass_owner}', not '{state_owner}'")]
    OwnerMismatch {
        /// The owner the state is scoped to.
        state_owner: OwnerId,
        /// The owner recorded on the pass.
        pass_owner: OwnerId,
    },
}

impl From<IssuanceError> for CoreError {
    fn from(err: IssuanceError) -> Self {
        Self::DomainViolation(DomainError::Issuance(err))
    }
}

impl CoreError {
    /// The issuance reason code, when this error is an issuance rejection.
    #[must_use]
    pub const fn rejection_code(&self) -> Option<&'static str> {
        match self {
            Self::DomainViolation(DomainError::Issuance(err)) => Some(err.code()),
            _ => None,
        }
    }
}

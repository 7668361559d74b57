// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State transitions and collaborator-facing queries for studio passes.
//!
//! `apply` turns a `Command` and the current `State` into a new state plus an
//! audit event. `PassService` wraps the pure entitlement engine behind the
//! host's attendance and schedule sources.

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

mod apply;
mod command;
mod error;
mod service;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::{CoreError, SourceError};
pub use service::{AttendanceSource, PassService, ScheduleSource};
pub use state::{State, TransitionResult};

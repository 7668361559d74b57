// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, Weekday};
use studio_pass_domain::{Pass, PassId, PassType};

/// A command represents operator or student intent as data only.
///
/// Commands are the only way to request changes to a student's passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue a fully specified pass (administrative issuance).
    IssuePass {
        /// The candidate pass.
        pass: Pass,
    },
    /// Purchase a pass with canonical counts and the policy validity window.
    PurchasePass {
        /// Identifier for the new pass.
        pass_id: PassId,
        /// The product being purchased.
        pass_type: PassType,
        /// The requested first day.
        start_date: NaiveDate,
        /// The weekday of each selected recurring class.
        slot_weekdays: Vec<Weekday>,
    },
    /// Move the end date of a pass later.
    ExtendEndDate {
        /// The pass to extend.
        pass_id: PassId,
        /// The new last day of validity.
        new_end_date: NaiveDate,
    },
    /// Add classes to the total of a pass.
    AddClasses {
        /// The pass to top up.
        pass_id: PassId,
        /// How many classes to add.
        amount: u32,
    },
    /// Switch a pass off administratively.
    Deactivate {
        /// The pass to switch off.
        pass_id: PassId,
    },
    /// Switch a previously deactivated pass back on.
    Reactivate {
        /// The pass to switch on.
        pass_id: PassId,
    },
}

impl Command {
    /// The audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IssuePass { .. } => "IssuePass",
            Self::PurchasePass { .. } => "PurchasePass",
            Self::ExtendEndDate { .. } => "ExtendEndDate",
            Self::AddClasses { .. } => "AddClasses",
            Self::Deactivate { .. } => "Deactivate",
            Self::Reactivate { .. } => "Reactivate",
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use chrono::NaiveDate;
use studio_pass_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use studio_pass_domain::{
    DomainError, IssuancePolicy, Pass, PassId, PassType, validate_for_issuance,
    validate_purchase_request,
};

/// Applies a command to the current state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `today` - The studio's current calendar date
/// * `policy` - The issuance policy in force
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A new pass fails issuance validation, duplicates an existing pass, or
///   belongs to another student
/// - The target pass does not exist
/// - The requested change is not permitted for the pass
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
    today: NaiveDate,
    policy: &IssuancePolicy,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();

    match command {
        Command::IssuePass { pass } => {
            if pass.owner_id != state.owner_id {
                return Err(CoreError::OwnerMismatch {
                    state_owner: state.owner_id.clone(),
                    pass_owner: pass.owner_id,
                });
            }
            validate_for_issuance(&pass, today, policy)?;

            let details: String = format!(
                "Issued {} pass '{}' valid {} to {}",
                pass.pass_type, pass.id, pass.start_date, pass.end_date
            );
            issue(state, pass, action_name, details, actor, cause)
        }
        Command::PurchasePass {
            pass_id,
            pass_type,
            start_date,
            slot_weekdays,
        } => {
            validate_purchase_request(pass_type, start_date, &slot_weekdays, today, policy)?;

            let pass: Pass = Pass::from_purchase(
                pass_id,
                state.owner_id.clone(),
                pass_type,
                start_date,
                policy,
            )?;
            validate_for_issuance(&pass, today, policy)?;

            let details: String = format!(
                "Purchased {} pass '{}' starting {} ({} weekly slots)",
                pass.pass_type,
                pass.id,
                pass.start_date,
                slot_weekdays.len()
            );
            issue(state, pass, action_name, details, actor, cause)
        }
        Command::ExtendEndDate {
            pass_id,
            new_end_date,
        } => update(state, &pass_id, action_name, actor, cause, |pass| {
            if new_end_date <= pass.end_date {
                return Err(DomainError::EndDateNotExtended {
                    pass_id: pass.id.clone(),
                    current: pass.end_date,
                    requested: new_end_date,
                });
            }
            let details: String = format!("End date {} -> {new_end_date}", pass.end_date);
            pass.end_date = new_end_date;
            Ok(details)
        }),
        Command::AddClasses { pass_id, amount } => {
            update(state, &pass_id, action_name, actor, cause, |pass| {
                let allowed: bool = amount > 0
                    && !matches!(pass.pass_type, PassType::FullPass | PassType::SingleClass);
                if !allowed {
                    return Err(DomainError::InvalidClassTopUp {
                        pass_id: pass.id.clone(),
                        pass_type: pass.pass_type,
                        amount,
                    });
                }
                let details: String = format!(
                    "Total classes {} -> {}",
                    pass.total_classes,
                    pass.total_classes.saturating_add(amount)
                );
                pass.total_classes = pass.total_classes.saturating_add(amount);
                Ok(details)
            })
        }
        Command::Deactivate { pass_id } => {
            update(state, &pass_id, action_name, actor, cause, |pass| {
                set_active(pass, false)
            })
        }
        Command::Reactivate { pass_id } => {
            update(state, &pass_id, action_name, actor, cause, |pass| {
                set_active(pass, true)
            })
        }
    }
}

/// Adds a validated pass to the state.
fn issue(
    state: &State,
    pass: Pass,
    action_name: &str,
    details: String,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    // Rule: pass identifiers are unique per student
    if state.has_pass(&pass.id) {
        return Err(DomainError::DuplicatePass(pass.id).into());
    }

    let after: StateSnapshot = StateSnapshot::of_pass(&pass);
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        Action::new(action_name.to_string(), Some(details)),
        StateSnapshot::absent(),
        after,
        state.owner_id.clone(),
        pass.id.clone(),
    );

    let mut new_state: State = state.clone();
    new_state.passes.push(pass);

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

/// Applies `change` to a copy of one pass and records the before/after snapshots.
fn update<F>(
    state: &State,
    pass_id: &PassId,
    action_name: &str,
    actor: Actor,
    cause: Cause,
    change: F,
) -> Result<TransitionResult, CoreError>
where
    F: FnOnce(&mut Pass) -> Result<String, DomainError>,
{
    let mut new_state: State = state.clone();
    let pass: &mut Pass = new_state
        .passes
        .iter_mut()
        .find(|pass| &pass.id == pass_id)
        .ok_or_else(|| DomainError::PassNotFound(pass_id.clone()))?;

    let before: StateSnapshot = StateSnapshot::of_pass(pass);
    let details: String = change(pass)?;
    let after: StateSnapshot = StateSnapshot::of_pass(pass);

    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        Action::new(action_name.to_string(), Some(details)),
        before,
        after,
        state.owner_id.clone(),
        pass_id.clone(),
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

fn set_active(pass: &mut Pass, is_active: bool) -> Result<String, DomainError> {
    if pass.is_active == is_active {
        return Err(DomainError::ActivationUnchanged {
            pass_id: pass.id.clone(),
            is_active,
        });
    }
    pass.is_active = is_active;
    Ok(format!("is_active -> {is_active}"))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::{resolve_approval, resolve_decline};
use crate::command::{ActionPayload, OrderAction};
use crate::error::{CoreError, GuardViolation};
use crate::state::{EngineEvent, TransitionResult};
use crate::transitions::{REASSIGN_MIN_HOURS, is_legal};
use inkdesk_audit::{Action, Actor, AuditEvent, Cause, OrderSnapshot, Role};
use inkdesk_domain::{
    Bid, Order, OrderStatus, PickedBy, RevisionRequest, RevisionRequestState, hours_to_deadline,
    revision_round_label,
};
use time::OffsetDateTime;

fn guard_failed(action: OrderAction, violation: GuardViolation) -> CoreError {
    CoreError::GuardFailed { action, violation }
}

fn require_field<'a>(
    value: Option<&'a str>,
    field: &'static str,
    action: OrderAction,
) -> Result<&'a str, CoreError> {
    value.ok_or_else(|| guard_failed(action, GuardViolation::MissingPayloadField { field }))
}

/// Applies an action to an order, producing the new order state and audit
/// event.
///
/// The input order is never mutated: the function validates the action
/// against the transition table, evaluates guards against `now`, and
/// returns a fully-resolved new order value. On any error the caller holds
/// the order unchanged — there is no partial state to roll back.
///
/// # Arguments
///
/// * `order` - The current order state (immutable)
/// * `action` - The action to apply
/// * `payload` - Per-action input fields
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - Wall-clock time of the action, injected for determinism
///
/// # Errors
///
/// Returns an error if:
/// - The action is not legal from the order's current status
/// - A guard (deadline proximity, file freshness, payload completeness)
///   blocks the action
/// - The action violates a domain rule (duplicate pending bid, resolved
///   target bid)
#[allow(clippy::too_many_lines)]
pub fn apply(
    order: &Order,
    action: OrderAction,
    payload: ActionPayload,
    actor: &Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    if !is_legal(order.status, action) {
        return Err(CoreError::InvalidTransition {
            status: order.status,
            action,
        });
    }

    let before: OrderSnapshot = OrderSnapshot::of(order);
    let mut new_order: Order = order.clone();
    let mut events: Vec<EngineEvent> = Vec::new();

    let detail: Option<String> = match action {
        OrderAction::Publish => {
            new_order.status = OrderStatus::Available;
            events.push(EngineEvent::OrderAvailable {
                order_id: new_order.id.clone(),
            });
            Some(String::from("Published to the writer pool"))
        }
        OrderAction::Bid => {
            let bid_id = require_field(payload.new_bid_id.as_deref(), "bidId", action)?;
            let writer_id = require_field(payload.writer_id.as_deref(), "writerId", action)?;
            let writer_name = payload
                .writer_name
                .clone()
                .unwrap_or_else(|| writer_id.to_string());
            let bid: Bid = Bid::new(
                bid_id.to_string(),
                writer_id.to_string(),
                writer_name,
                payload.notes.clone(),
                now,
            );
            new_order.add_bid(bid)?;
            events.push(EngineEvent::BidPlaced {
                order_id: new_order.id.clone(),
                bid_id: bid_id.to_string(),
                writer_id: writer_id.to_string(),
            });
            Some(format!("Writer '{writer_id}' placed bid '{bid_id}'"))
        }
        OrderAction::ApproveBid => {
            let bid_id = require_field(payload.bid_id.as_deref(), "bidId", action)?;
            let writer_id = resolve_approval(&mut new_order, bid_id, now)?;
            events.push(EngineEvent::OrderAssigned {
                order_id: new_order.id.clone(),
                writer_id: writer_id.clone(),
            });
            Some(format!(
                "Approved bid '{bid_id}'; order assigned to writer '{writer_id}'"
            ))
        }
        OrderAction::DeclineBid => {
            let bid_id = require_field(payload.bid_id.as_deref(), "bidId", action)?;
            resolve_decline(&mut new_order, bid_id)?;
            Some(format!("Declined bid '{bid_id}'; order remains open"))
        }
        OrderAction::Assign => {
            if let Some(approved) = new_order.approved_bid() {
                return Err(guard_failed(
                    action,
                    GuardViolation::ApprovedBidExists {
                        bid_id: approved.id.clone(),
                    },
                ));
            }
            let writer_id = require_field(payload.writer_id.as_deref(), "writerId", action)?;
            new_order.writer_id = Some(writer_id.to_string());
            new_order.writer_name = payload
                .writer_name
                .clone()
                .or_else(|| Some(writer_id.to_string()));
            new_order.picked_by = Some(PickedBy::Admin);
            new_order.status = OrderStatus::Assigned;
            new_order.assigned_at = Some(now);
            events.push(EngineEvent::OrderAssigned {
                order_id: new_order.id.clone(),
                writer_id: writer_id.to_string(),
            });
            Some(format!("Directly assigned to writer '{writer_id}'"))
        }
        OrderAction::MakeAvailable => {
            if new_order.picked_by != Some(PickedBy::Writer) {
                return Err(guard_failed(action, GuardViolation::NotWriterPicked));
            }
            new_order.writer_id = None;
            new_order.writer_name = None;
            new_order.picked_by = None;
            new_order.assigned_at = None;
            new_order.status = OrderStatus::Available;
            events.push(EngineEvent::OrderAvailable {
                order_id: new_order.id.clone(),
            });
            Some(String::from("Returned to the writer pool"))
        }
        OrderAction::UploadFiles => {
            if payload.files.is_empty() {
                return Err(guard_failed(
                    action,
                    GuardViolation::MissingPayloadField { field: "files" },
                ));
            }
            let count = payload.files.len();
            if new_order.status == OrderStatus::Revision {
                new_order.revision_files.extend(payload.files);
            } else {
                new_order.original_files.extend(payload.files);
            }
            Some(format!("Uploaded {count} file(s)"))
        }
        OrderAction::SubmitToAdmin => {
            if !new_order.has_submission_files() {
                return Err(guard_failed(action, GuardViolation::NoSubmissionFiles));
            }
            new_order.status = OrderStatus::Submitted;
            new_order.submitted_to_admin_at = Some(now);
            events.push(EngineEvent::OrderSubmitted {
                order_id: new_order.id.clone(),
            });
            Some(String::from("Submitted for admin review"))
        }
        OrderAction::Approve => {
            new_order.status = OrderStatus::Completed;
            new_order.admin_reviewed_at = Some(now);
            new_order.completed_at = Some(now);
            events.push(EngineEvent::OrderCompleted {
                order_id: new_order.id.clone(),
            });
            Some(format!(
                "Approved and completed ({})",
                revision_round_label(new_order.revision_count)
            ))
        }
        OrderAction::Reject => {
            new_order.status = OrderStatus::Rejected;
            new_order.admin_reviewed_at = Some(now);
            events.push(EngineEvent::OrderRejected {
                order_id: new_order.id.clone(),
            });
            Some(String::from("Rejected in admin review"))
        }
        OrderAction::RequestRevision => {
            let explanation = payload
                .explanation
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .ok_or_else(|| guard_failed(action, GuardViolation::MissingExplanation))?;
            new_order.status = OrderStatus::Revision;
            new_order.revision_count += 1;
            new_order.revision_score = u8::try_from(new_order.revision_count).map_or(0, |count| {
                Order::INITIAL_REVISION_SCORE.saturating_sub(count)
            });
            new_order.admin_reviewed_at = Some(now);
            new_order.revision_explanation = Some(explanation.to_string());
            let request_id = payload.revision_request_id.clone().unwrap_or_else(|| {
                format!("{}-rev-{}", new_order.id, new_order.revision_count)
            });
            new_order.revision_requests.push(RevisionRequest {
                id: request_id,
                requested_at: now,
                explanation: explanation.to_string(),
                revision_type: payload.revision_type.clone(),
                priority: payload.revision_priority.clone(),
                areas: payload.revision_areas.clone(),
                state: RevisionRequestState::Open,
            });
            events.push(EngineEvent::RevisionRequested {
                order_id: new_order.id.clone(),
                round: new_order.revision_count,
            });
            Some(format!(
                "Requested revision round {}",
                new_order.revision_count
            ))
        }
        OrderAction::Resubmit => {
            let reviewed_at = new_order
                .admin_reviewed_at
                .ok_or_else(|| guard_failed(action, GuardViolation::NoFreshRevisionFile))?;
            if !new_order.has_fresh_revision_file(reviewed_at) {
                return Err(guard_failed(action, GuardViolation::NoFreshRevisionFile));
            }
            new_order.status = OrderStatus::Submitted;
            new_order.revision_submitted_at = Some(now);
            for request in &mut new_order.revision_requests {
                if request.state == RevisionRequestState::Open {
                    request.state = RevisionRequestState::Resolved;
                }
            }
            events.push(EngineEvent::OrderSubmitted {
                order_id: new_order.id.clone(),
            });
            Some(format!(
                "Resubmitted after {}",
                revision_round_label(new_order.revision_count)
            ))
        }
        OrderAction::Reassign => {
            let hours_remaining = hours_to_deadline(new_order.deadline, now);
            if hours_remaining < REASSIGN_MIN_HOURS {
                return Err(guard_failed(
                    action,
                    GuardViolation::DeadlineTooClose {
                        hours_remaining,
                        minimum_hours: REASSIGN_MIN_HOURS,
                    },
                ));
            }
            new_order.writer_id = None;
            new_order.writer_name = None;
            new_order.picked_by = None;
            new_order.assigned_at = None;
            new_order.status = OrderStatus::Available;
            events.push(EngineEvent::OrderAvailable {
                order_id: new_order.id.clone(),
            });
            Some(format!(
                "Reassigned to the pool with {hours_remaining:.1} hours to deadline"
            ))
        }
        OrderAction::Complete => {
            new_order.status = OrderStatus::Completed;
            new_order.completed_at = Some(now);
            events.push(EngineEvent::OrderCompleted {
                order_id: new_order.id.clone(),
            });
            Some(String::from("Marked completed"))
        }
        OrderAction::RemoveFile => {
            let file_id = require_field(payload.file_id.as_deref(), "fileId", action)?;
            let owner = new_order
                .original_files
                .iter()
                .chain(new_order.revision_files.iter())
                .find(|f| f.id == file_id)
                .map(|f| f.uploaded_by.clone())
                .ok_or_else(|| {
                    guard_failed(
                        action,
                        GuardViolation::FileNotFound {
                            file_id: file_id.to_string(),
                        },
                    )
                })?;
            if actor.role == Role::Writer && owner.as_deref() != Some(actor.id.as_str()) {
                return Err(guard_failed(
                    action,
                    GuardViolation::FileNotOwned {
                        file_id: file_id.to_string(),
                    },
                ));
            }
            new_order.remove_file(file_id);
            Some(format!("Removed file '{file_id}'"))
        }
    };

    new_order.updated_at = now;

    let after: OrderSnapshot = OrderSnapshot::of(&new_order);
    let audit_event: AuditEvent = AuditEvent::new(
        actor.clone(),
        cause,
        Action::new(action.as_str().to_string(), detail),
        before,
        after,
        now,
    );

    Ok(TransitionResult {
        new_order,
        audit_event,
        events,
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use inkdesk_domain::{Order, OrderStatus};
use time::OffsetDateTime;

/// The role of the entity performing an action.
///
/// Roles gate which lifecycle actions an actor may perform; the audit
/// trail records the role as it was at action time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A writer working orders.
    Writer,
    /// An administrator managing the order pool.
    Admin,
    /// An automated process (deadline sweeps, reassignment).
    System,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Writer => "writer",
            Self::Admin => "admin",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change:
/// a writer, an admin, or an automated trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role the actor held when acting.
    pub role: Role,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role the actor held when acting
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a state change was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, event ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The action name in wire form (e.g., "`approve_bid`", "`submit_to_admin`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of the audit-relevant parts of an order.
///
/// Captures enough to reconstruct what the transition changed without
/// storing the full aggregate twice per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSnapshot {
    /// The order the snapshot describes.
    pub order_id: String,
    /// Lifecycle status at snapshot time.
    pub status: OrderStatus,
    /// The assigned writer, if any.
    pub writer_id: Option<String>,
    /// Revision rounds requested so far.
    pub revision_count: u32,
    /// Total bids ever placed.
    pub bid_count: usize,
}

impl OrderSnapshot {
    /// Captures a snapshot of an order's audit-relevant state.
    #[must_use]
    pub fn of(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            status: order.status,
            writer_id: order.writer_id.clone(),
            revision_count: order.revision_count,
            bid_count: order.bids.len(),
        }
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change must produce exactly one audit event.
/// Audit events are immutable once created and capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The order state before the transition (before)
/// - The order state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The order state before the transition.
    pub before: OrderSnapshot,
    /// The order state after the transition.
    pub after: OrderSnapshot,
    /// When the transition was applied.
    pub at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The order state before the transition
    /// * `after` - The order state after the transition
    /// * `at` - When the transition was applied
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: OrderSnapshot,
        after: OrderSnapshot,
        at: OffsetDateTime,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_order() -> Order {
        Order::new(
            String::from("ORD-001"),
            String::from("Case study"),
            3,
            datetime!(2026-09-05 12:00 UTC),
            datetime!(2026-08-25 09:00 UTC),
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("writer-123"), Role::Writer);

        assert_eq!(actor.id, "writer-123");
        assert_eq!(actor.role, Role::Writer);
    }

    #[test]
    fn test_role_string_forms() {
        assert_eq!(Role::Writer.as_str(), "writer");
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::System.as_str(), "system");
    }

    #[test]
    fn test_cause_creation_requires_all_fields() {
        let cause: Cause = Cause::new(String::from("req-456"), String::from("Admin request"));

        assert_eq!(cause.id, "req-456");
        assert_eq!(cause.description, "Admin request");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("approve_bid"),
            Some(String::from("Bid BID-1 approved")),
        );

        assert_eq!(action.name, "approve_bid");
        assert_eq!(action.details, Some(String::from("Bid BID-1 approved")));
    }

    #[test]
    fn test_snapshot_captures_order_state() {
        let mut order = sample_order();
        order.status = OrderStatus::Assigned;
        order.writer_id = Some(String::from("w1"));
        order.revision_count = 2;

        let snapshot = OrderSnapshot::of(&order);
        assert_eq!(snapshot.order_id, "ORD-001");
        assert_eq!(snapshot.status, OrderStatus::Assigned);
        assert_eq!(snapshot.writer_id, Some(String::from("w1")));
        assert_eq!(snapshot.revision_count, 2);
        assert_eq!(snapshot.bid_count, 0);
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let order = sample_order();
        let actor: Actor = Actor::new(String::from("admin-1"), Role::Admin);
        let cause: Cause = Cause::new(String::from("req-456"), String::from("Admin request"));
        let action: Action = Action::new(String::from("publish"), None);
        let before = OrderSnapshot::of(&order);
        let mut published = order;
        published.status = OrderStatus::Available;
        let after = OrderSnapshot::of(&published);
        let at = datetime!(2026-08-25 10:00 UTC);

        let event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action.clone(),
            before.clone(),
            after.clone(),
            at,
        );

        assert_eq!(event.actor, actor);
        assert_eq!(event.cause, cause);
        assert_eq!(event.action, action);
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
        assert_eq!(event.at, at);
    }

    #[test]
    fn test_audit_event_records_status_change() {
        let order = sample_order();
        let before = OrderSnapshot::of(&order);
        let mut published = order;
        published.status = OrderStatus::Available;
        let after = OrderSnapshot::of(&published);

        let event = AuditEvent::new(
            Actor::new(String::from("admin-1"), Role::Admin),
            Cause::new(String::from("req-1"), String::from("Publish to pool")),
            Action::new(String::from("publish"), None),
            before,
            after,
            datetime!(2026-08-25 10:00 UTC),
        );

        assert_eq!(event.before.status, OrderStatus::Draft);
        assert_eq!(event.after.status, OrderStatus::Available);
        assert_eq!(event.before.order_id, event.after.order_id);
    }
}

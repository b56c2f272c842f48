// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inkdesk_audit::AuditEvent;
use inkdesk_domain::Order;

/// Notifier-facing events emitted on committed transitions.
///
/// These are fire-and-forget: the engine produces them alongside the new
/// order state, and the caller dispatches them only after the transition
/// has been durably committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The order entered the writer pool.
    OrderAvailable {
        /// The affected order.
        order_id: String,
    },
    /// A writer placed a bid.
    BidPlaced {
        /// The affected order.
        order_id: String,
        /// The new bid.
        bid_id: String,
        /// The bidding writer.
        writer_id: String,
    },
    /// The order was assigned to a writer.
    OrderAssigned {
        /// The affected order.
        order_id: String,
        /// The winning writer.
        writer_id: String,
    },
    /// The writer submitted work for review.
    OrderSubmitted {
        /// The affected order.
        order_id: String,
    },
    /// The admin requested a revision round.
    RevisionRequested {
        /// The affected order.
        order_id: String,
        /// The revision round number after the request.
        round: u32,
    },
    /// The order was rejected in review.
    OrderRejected {
        /// The affected order.
        order_id: String,
    },
    /// The order was settled.
    OrderCompleted {
        /// The affected order.
        order_id: String,
    },
}

/// The result of applying an action to an order.
///
/// Contains the new order state and exactly one audit event, plus any
/// notifier events. The input order is never mutated; callers commit the
/// new state (or discard it) atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The order state after the transition.
    pub new_order: Order,
    /// The audit event for this transition.
    pub audit_event: AuditEvent,
    /// Notifier events to dispatch after commit.
    pub events: Vec<EngineEvent>,
}

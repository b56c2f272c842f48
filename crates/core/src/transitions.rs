// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The legal-transition table.
//!
//! The table is the single authority on which actions are structurally
//! legal from which statuses. Any `(status, action)` pair it does not
//! list is an `InvalidTransition`; the engine never silently no-ops.
//! Guards (deadline proximity, file freshness, payload completeness) are
//! evaluated separately in `apply`, after the table admits the pair.

use crate::command::OrderAction;
use inkdesk_domain::OrderStatus;

/// Minimum hours to deadline required for `reassign`.
///
/// Evaluated against wall-clock time at the moment of the action, never
/// at order creation.
pub const REASSIGN_MIN_HOURS: f64 = 12.0;

/// Returns the statuses an action is legal from.
#[must_use]
pub const fn legal_sources(action: OrderAction) -> &'static [OrderStatus] {
    match action {
        OrderAction::Publish => &[OrderStatus::Draft],
        OrderAction::Bid
        | OrderAction::ApproveBid
        | OrderAction::DeclineBid
        | OrderAction::Assign => &[OrderStatus::Available],
        OrderAction::MakeAvailable => &[OrderStatus::Assigned],
        OrderAction::UploadFiles | OrderAction::RemoveFile => &[
            OrderStatus::Assigned,
            OrderStatus::InProgress,
            OrderStatus::Revision,
        ],
        OrderAction::SubmitToAdmin => &[OrderStatus::Assigned, OrderStatus::InProgress],
        OrderAction::Approve | OrderAction::Reject | OrderAction::RequestRevision => {
            &[OrderStatus::Submitted]
        }
        OrderAction::Resubmit => &[OrderStatus::Revision],
        OrderAction::Reassign => &[OrderStatus::InProgress],
        OrderAction::Complete => &[OrderStatus::Approved],
    }
}

/// Checks whether an action is structurally legal from a status.
#[must_use]
pub fn is_legal(status: OrderStatus, action: OrderAction) -> bool {
    legal_sources(action).contains(&status)
}

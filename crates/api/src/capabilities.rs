// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-based action gating.
//!
//! Authorization is decided here, before the engine is invoked, so an
//! actor outside their role never reaches the transition table. The
//! engine itself stays role-agnostic apart from file ownership.

use crate::error::ApiError;
use inkdesk::OrderAction;
use inkdesk_audit::Role;

/// Actions a writer may dispatch.
const WRITER_ACTIONS: &[OrderAction] = &[
    OrderAction::Bid,
    OrderAction::UploadFiles,
    OrderAction::SubmitToAdmin,
    OrderAction::Resubmit,
    OrderAction::RemoveFile,
    OrderAction::Reassign,
    OrderAction::Complete,
];

/// Actions an admin may dispatch.
const ADMIN_ACTIONS: &[OrderAction] = &[
    OrderAction::Publish,
    OrderAction::Assign,
    OrderAction::ApproveBid,
    OrderAction::DeclineBid,
    OrderAction::MakeAvailable,
    OrderAction::Approve,
    OrderAction::Reject,
    OrderAction::RequestRevision,
    OrderAction::Reassign,
    OrderAction::Complete,
    OrderAction::RemoveFile,
];

/// Returns the actions a role may dispatch.
///
/// The system role is unrestricted; automated sweeps run the same
/// lifecycle actions either human role can.
#[must_use]
pub const fn allowed_actions(role: Role) -> &'static [OrderAction] {
    match role {
        Role::Writer => WRITER_ACTIONS,
        Role::Admin => ADMIN_ACTIONS,
        Role::System => OrderAction::all(),
    }
}

/// Checks whether a role may dispatch an action.
#[must_use]
pub fn role_allows(role: Role, action: OrderAction) -> bool {
    allowed_actions(role).contains(&action)
}

/// Rejects a dispatch the actor's role does not permit.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the role may not perform the
/// action.
pub fn authorize(role: Role, action: OrderAction) -> Result<(), ApiError> {
    if role_allows(role, action) {
        return Ok(());
    }
    Err(ApiError::Unauthorized {
        action: action.as_str().to_string(),
        role: role.as_str().to_string(),
    })
}

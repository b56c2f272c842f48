// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use inkdesk_domain::OrderFile;
use std::str::FromStr;

/// The closed vocabulary of lifecycle actions.
///
/// Callers dispatch actions by their wire string (e.g. `"approve_bid"`);
/// anything not in this set is rejected before the transition table is
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    /// Make a draft order visible to the writer pool.
    Publish,
    /// Place a writer bid on an available order.
    Bid,
    /// Approve one pending bid, declining all siblings.
    ApproveBid,
    /// Decline one pending bid, leaving the order open.
    DeclineBid,
    /// Directly assign a writer without a bid.
    Assign,
    /// Return a writer-picked order to the pool before work starts.
    MakeAvailable,
    /// Attach submission files.
    UploadFiles,
    /// Submit work for admin review.
    SubmitToAdmin,
    /// Accept the submission.
    Approve,
    /// Reject the submission.
    Reject,
    /// Send the submission back for rework.
    RequestRevision,
    /// Resubmit reworked files.
    Resubmit,
    /// Release an in-progress order back to the pool.
    Reassign,
    /// Settle an approved order.
    Complete,
    /// Remove an attached file.
    RemoveFile,
}

impl OrderAction {
    /// Returns the wire string for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Bid => "bid",
            Self::ApproveBid => "approve_bid",
            Self::DeclineBid => "decline_bid",
            Self::Assign => "assign",
            Self::MakeAvailable => "make_available",
            Self::UploadFiles => "upload_files",
            Self::SubmitToAdmin => "submit_to_admin",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestRevision => "request_revision",
            Self::Resubmit => "resubmit",
            Self::Reassign => "reassign",
            Self::Complete => "complete",
            Self::RemoveFile => "remove_file",
        }
    }

    /// Returns every action, in declaration order.
    ///
    /// Used for exhaustive transition-closure checks.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Publish,
            Self::Bid,
            Self::ApproveBid,
            Self::DeclineBid,
            Self::Assign,
            Self::MakeAvailable,
            Self::UploadFiles,
            Self::SubmitToAdmin,
            Self::Approve,
            Self::Reject,
            Self::RequestRevision,
            Self::Resubmit,
            Self::Reassign,
            Self::Complete,
            Self::RemoveFile,
        ]
    }
}

impl FromStr for OrderAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "bid" => Ok(Self::Bid),
            "approve_bid" => Ok(Self::ApproveBid),
            "decline_bid" => Ok(Self::DeclineBid),
            "assign" => Ok(Self::Assign),
            "make_available" => Ok(Self::MakeAvailable),
            "upload_files" => Ok(Self::UploadFiles),
            "submit_to_admin" => Ok(Self::SubmitToAdmin),
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "request_revision" => Ok(Self::RequestRevision),
            "resubmit" => Ok(Self::Resubmit),
            "reassign" => Ok(Self::Reassign),
            "complete" => Ok(Self::Complete),
            "remove_file" => Ok(Self::RemoveFile),
            _ => Err(CoreError::UnknownAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The per-action input fields accompanying a dispatched action.
///
/// Each action consumes the fields it needs and ignores the rest; a field
/// required by an action but left unset fails the guard for that action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionPayload {
    /// Target bid for `approve_bid` / `decline_bid`.
    pub bid_id: Option<String>,
    /// New bid identifier for `bid`.
    pub new_bid_id: Option<String>,
    /// Writer for `bid` (the bidder) or `assign` (the assignee).
    pub writer_id: Option<String>,
    /// The writer's display name.
    pub writer_name: Option<String>,
    /// Optional pitch for `bid`.
    pub notes: Option<String>,
    /// Admin explanation for `request_revision` (required, non-empty).
    pub explanation: Option<String>,
    /// Optional revision category.
    pub revision_type: Option<String>,
    /// Optional revision priority.
    pub revision_priority: Option<String>,
    /// Specific areas of the work flagged for rework.
    pub revision_areas: Vec<String>,
    /// Files for `upload_files`.
    pub files: Vec<OrderFile>,
    /// Identifier for `request_revision`'s appended record.
    pub revision_request_id: Option<String>,
    /// Target file for `remove_file`.
    pub file_id: Option<String>,
}

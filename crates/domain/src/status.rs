// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status vocabulary.
//!
//! This module defines the closed set of lifecycle states an order can
//! occupy. Which transitions between them are legal is owned by the core
//! crate's transition table; the domain only names the states and knows
//! which are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states for a work order.
///
/// Serialized using the human-readable labels the order records carry on
/// the wire (e.g. `"Awaiting Approval"`, `"In Progress"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created but not yet visible to writers.
    Draft,
    /// Open for writer bids or direct assignment.
    Available,
    /// A writer bid is pending admin approval.
    #[serde(rename = "Awaiting Approval")]
    AwaitingApproval,
    /// Assigned to a writer who has not started work.
    Assigned,
    /// Writer is actively working.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Submitted for admin review.
    Submitted,
    /// A revision round was submitted for re-review.
    Resubmitted,
    /// Admin requested rework.
    Revision,
    /// Admin accepted the submission.
    Approved,
    /// Admin rejected the submission.
    Rejected,
    /// Finished and settled.
    Completed,
    /// Past deadline without delivery.
    Late,
    /// Pulled back from a writer by the system.
    #[serde(rename = "Auto-Reassigned")]
    AutoReassigned,
    /// Withdrawn before completion.
    Cancelled,
    /// Paused by the admin.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Under dispute.
    Disputed,
    /// Refunded to the client.
    Refunded,
}

impl OrderStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Available => "Available",
            Self::AwaitingApproval => "Awaiting Approval",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Submitted => "Submitted",
            Self::Resubmitted => "Resubmitted",
            Self::Revision => "Revision",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Late => "Late",
            Self::AutoReassigned => "Auto-Reassigned",
            Self::Cancelled => "Cancelled",
            Self::OnHold => "On Hold",
            Self::Disputed => "Disputed",
            Self::Refunded => "Refunded",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOrderStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Available" => Ok(Self::Available),
            "Awaiting Approval" => Ok(Self::AwaitingApproval),
            "Assigned" => Ok(Self::Assigned),
            "In Progress" => Ok(Self::InProgress),
            "Submitted" => Ok(Self::Submitted),
            "Resubmitted" => Ok(Self::Resubmitted),
            "Revision" => Ok(Self::Revision),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Completed" => Ok(Self::Completed),
            "Late" => Ok(Self::Late),
            "Auto-Reassigned" => Ok(Self::AutoReassigned),
            "Cancelled" => Ok(Self::Cancelled),
            "On Hold" => Ok(Self::OnHold),
            "Disputed" => Ok(Self::Disputed),
            "Refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no action may leave it).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Refunded)
    }

    /// Returns every status value, in declaration order.
    ///
    /// Used for exhaustive transition-closure checks.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Draft,
            Self::Available,
            Self::AwaitingApproval,
            Self::Assigned,
            Self::InProgress,
            Self::Submitted,
            Self::Resubmitted,
            Self::Revision,
            Self::Approved,
            Self::Rejected,
            Self::Completed,
            Self::Late,
            Self::AutoReassigned,
            Self::Cancelled,
            Self::OnHold,
            Self::Disputed,
            Self::Refunded,
        ]
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

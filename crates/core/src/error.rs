// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OrderAction;
use inkdesk_domain::{BidStatus, DomainError, OrderStatus};

/// A guard that blocked an otherwise-structurally-valid action.
///
/// Guard failures carry enough context for a caller to explain why the
/// action is blocked, not just that it is.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardViolation {
    /// Fewer hours remain before the deadline than the action permits.
    DeadlineTooClose {
        /// Hours remaining at the moment of the action.
        hours_remaining: f64,
        /// The minimum the action requires.
        minimum_hours: f64,
    },
    /// Submission requires at least one uploaded file.
    NoSubmissionFiles,
    /// Resubmission requires a file uploaded after the admin review.
    NoFreshRevisionFile,
    /// A revision request requires a non-empty explanation.
    MissingExplanation,
    /// Direct assignment is blocked because a bid was already approved.
    ApprovedBidExists {
        /// The winning bid.
        bid_id: String,
    },
    /// Only writer-picked orders may be returned to the pool this way.
    NotWriterPicked,
    /// The referenced file does not exist on the order.
    FileNotFound {
        /// The missing file id.
        file_id: String,
    },
    /// Writers may only remove files they uploaded themselves.
    FileNotOwned {
        /// The protected file id.
        file_id: String,
    },
    /// The action requires a payload field that was not supplied.
    MissingPayloadField {
        /// The absent field name.
        field: &'static str,
    },
}

impl std::fmt::Display for GuardViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeadlineTooClose {
                hours_remaining,
                minimum_hours,
            } => write!(
                f,
                "Only {hours_remaining:.1} hours remain before the deadline; at least {minimum_hours:.0} are required"
            ),
            Self::NoSubmissionFiles => {
                write!(f, "At least one uploaded file is required before submission")
            }
            Self::NoFreshRevisionFile => {
                write!(
                    f,
                    "No file has been uploaded since the revision was requested"
                )
            }
            Self::MissingExplanation => {
                write!(f, "A revision request requires a non-empty explanation")
            }
            Self::ApprovedBidExists { bid_id } => {
                write!(f, "Bid '{bid_id}' has already been approved on this order")
            }
            Self::NotWriterPicked => {
                write!(f, "Only writer-picked orders can be returned to the pool")
            }
            Self::FileNotFound { file_id } => {
                write!(f, "File '{file_id}' does not exist on this order")
            }
            Self::FileNotOwned { file_id } => {
                write!(f, "File '{file_id}' was not uploaded by the acting writer")
            }
            Self::MissingPayloadField { field } => {
                write!(f, "Required payload field '{field}' was not supplied")
            }
        }
    }
}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The action string is not in the recognized vocabulary.
    UnknownAction(String),
    /// The action is not legal from the order's current status.
    InvalidTransition {
        /// The order's status at dispatch time.
        status: OrderStatus,
        /// The rejected action.
        action: OrderAction,
    },
    /// The referenced order does not exist.
    OrderNotFound(String),
    /// The referenced bid does not exist on the order.
    BidNotFound {
        /// The order searched.
        order_id: String,
        /// The missing bid id.
        bid_id: String,
    },
    /// The referenced bid has already been resolved.
    BidNotPending {
        /// The order holding the bid.
        order_id: String,
        /// The resolved bid.
        bid_id: String,
        /// The bid's actual status.
        status: BidStatus,
    },
    /// A precondition blocked an otherwise-valid action.
    GuardFailed {
        /// The blocked action.
        action: OrderAction,
        /// What the guard found.
        violation: GuardViolation,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(f, "Unknown action: '{action}'"),
            Self::InvalidTransition { status, action } => {
                write!(f, "Action '{action}' is not legal from status '{status}'")
            }
            Self::OrderNotFound(order_id) => write!(f, "Order '{order_id}' not found"),
            Self::BidNotFound { order_id, bid_id } => {
                write!(f, "Bid '{bid_id}' not found on order '{order_id}'")
            }
            Self::BidNotPending {
                order_id,
                bid_id,
                status,
            } => write!(
                f,
                "Bid '{bid_id}' on order '{order_id}' is already {}",
                status.as_str()
            ),
            Self::GuardFailed { action, violation } => {
                write!(f, "Action '{action}' blocked: {violation}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

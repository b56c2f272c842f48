// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use inkdesk::CoreError;
use inkdesk_domain::DomainError;
use inkdesk_store::StoreError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core/store errors and represent the
/// API contract; inner errors are translated explicitly and never leak
/// raw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The actor's role does not permit the action.
    #[error("Unauthorized: '{action}' is not permitted for role '{role}'")]
    Unauthorized {
        /// The attempted action.
        action: String,
        /// The actor's role.
        role: String,
    },
    /// The action is not legal from the order's current status.
    #[error("Action '{action}' is not legal from status '{status}'")]
    InvalidTransition {
        /// The order's status at dispatch time.
        status: String,
        /// The rejected action.
        action: String,
    },
    /// A guard blocked an otherwise-valid action.
    #[error("Action '{action}' blocked: {reason}")]
    GuardBlocked {
        /// The blocked action.
        action: String,
        /// Why the guard refused, in user-facing terms.
        reason: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    RuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The order was modified concurrently; the caller should retry.
    #[error("Concurrent modification: {message}")]
    Conflict {
        /// A description of the lost race.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidOrderStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a recognized order status"),
        },
        DomainError::InvalidBidStatus(status) => ApiError::InvalidInput {
            field: String::from("bidStatus"),
            message: format!("'{status}' is not a recognized bid status"),
        },
        DomainError::InvalidPodStatus(status) => ApiError::InvalidInput {
            field: String::from("podStatus"),
            message: format!("'{status}' is not a recognized POD order status"),
        },
        DomainError::InvalidUrgency(urgency) => ApiError::InvalidInput {
            field: String::from("urgency"),
            message: format!("'{urgency}' is not a recognized urgency level"),
        },
        DomainError::DuplicatePendingBid {
            order_id,
            writer_id,
        } => ApiError::RuleViolation {
            rule: String::from("unique_pending_bid"),
            message: format!(
                "Writer '{writer_id}' already has a pending bid on order '{order_id}'"
            ),
        },
        DomainError::BidAlreadyApproved { order_id, bid_id } => ApiError::RuleViolation {
            rule: String::from("single_approved_bid"),
            message: format!("Order '{order_id}' was already won by bid '{bid_id}'"),
        },
        DomainError::InvalidPages { pages } => ApiError::InvalidInput {
            field: String::from("pages"),
            message: format!("Invalid page count: {pages}. Must be at least 1"),
        },
        DomainError::InvalidRating { rating } => ApiError::InvalidInput {
            field: String::from("averageRating"),
            message: format!("Invalid rating: {rating}. Must be between 0.0 and 5.0"),
        },
        DomainError::EmptyRevisionExplanation => ApiError::InvalidInput {
            field: String::from("explanation"),
            message: String::from("A revision request requires a non-empty explanation"),
        },
        DomainError::InvalidPodTransition { from, to, reason } => ApiError::RuleViolation {
            rule: String::from("pod_lifecycle"),
            message: format!("Cannot move POD order from '{from}' to '{to}': {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::UnknownAction(action) => ApiError::InvalidInput {
            field: String::from("action"),
            message: format!("'{action}' is not a recognized action"),
        },
        CoreError::InvalidTransition { status, action } => ApiError::InvalidTransition {
            status: status.as_str().to_string(),
            action: action.as_str().to_string(),
        },
        CoreError::OrderNotFound(order_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order '{order_id}' does not exist"),
        },
        CoreError::BidNotFound { order_id, bid_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Bid"),
            message: format!("Bid '{bid_id}' does not exist on order '{order_id}'"),
        },
        CoreError::BidNotPending {
            order_id,
            bid_id,
            status,
        } => ApiError::RuleViolation {
            rule: String::from("bid_not_pending"),
            message: format!(
                "Bid '{bid_id}' on order '{order_id}' is already {}",
                status.as_str()
            ),
        },
        CoreError::GuardFailed { action, violation } => ApiError::GuardBlocked {
            action: action.as_str().to_string(),
            reason: violation.to_string(),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
///
/// Version conflicts surface as retryable `Conflict` responses.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::OrderNotFound(order_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order '{order_id}' does not exist"),
        },
        StoreError::DuplicateOrder(order_id) => ApiError::RuleViolation {
            rule: String::from("unique_order_id"),
            message: format!("Order '{order_id}' already exists"),
        },
        StoreError::VersionConflict {
            order_id,
            expected,
            actual,
        } => ApiError::Conflict {
            message: format!(
                "Order '{order_id}' was modified concurrently (expected version {expected}, found {actual}); retry"
            ),
        },
        StoreError::LockPoisoned => ApiError::Internal {
            message: String::from("Store lock poisoned"),
        },
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Order status string is not a recognized status.
    InvalidOrderStatus(String),
    /// Bid status string is not a recognized status.
    InvalidBidStatus(String),
    /// POD order status string is not a recognized status.
    InvalidPodStatus(String),
    /// Urgency level string is not recognized.
    InvalidUrgency(String),
    /// A writer already has a pending bid on this order.
    DuplicatePendingBid {
        /// The order being bid on.
        order_id: String,
        /// The writer with the existing pending bid.
        writer_id: String,
    },
    /// An order already carries an approved bid.
    BidAlreadyApproved {
        /// The order with the approved bid.
        order_id: String,
        /// The bid that was previously approved.
        bid_id: String,
    },
    /// Page count must be at least one.
    InvalidPages {
        /// The invalid page count.
        pages: u32,
    },
    /// A rating outside the 0.0-5.0 scale was supplied.
    InvalidRating {
        /// The invalid rating value.
        rating: f64,
    },
    /// A revision explanation is required but was empty.
    EmptyRevisionExplanation,
    /// A POD status transition is not permitted.
    InvalidPodTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrderStatus(status) => write!(f, "Invalid order status: '{status}'"),
            Self::InvalidBidStatus(status) => write!(f, "Invalid bid status: '{status}'"),
            Self::InvalidPodStatus(status) => write!(f, "Invalid POD order status: '{status}'"),
            Self::InvalidUrgency(urgency) => write!(f, "Invalid urgency level: '{urgency}'"),
            Self::DuplicatePendingBid {
                order_id,
                writer_id,
            } => {
                write!(
                    f,
                    "Writer '{writer_id}' already has a pending bid on order '{order_id}'"
                )
            }
            Self::BidAlreadyApproved { order_id, bid_id } => {
                write!(
                    f,
                    "Order '{order_id}' already has approved bid '{bid_id}'"
                )
            }
            Self::InvalidPages { pages } => {
                write!(f, "Invalid page count: {pages}. Must be at least 1")
            }
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating}. Must be between 0.0 and 5.0")
            }
            Self::EmptyRevisionExplanation => {
                write!(f, "A revision request requires a non-empty explanation")
            }
            Self::InvalidPodTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid POD transition from '{from}' to '{to}': {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

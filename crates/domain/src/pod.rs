// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Print-on-delivery (POD) orders.
//!
//! POD orders are physical deliverables with a payment tail, so they run a
//! separate, simpler lifecycle than writing orders. The status set is
//! closed and transitions are validated here rather than in the core
//! transition table, since no bidding or revision machinery applies.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Lifecycle states for a POD order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodStatus {
    /// Open for assignment.
    Available,
    /// Assigned to a handler who has not started.
    Assigned,
    /// Being prepared.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Prepared and awaiting dispatch.
    #[serde(rename = "Ready for Delivery")]
    ReadyForDelivery,
    /// Handed to the client; payment outstanding.
    Delivered,
    /// Payment collected; the order is settled.
    #[serde(rename = "Payment Received")]
    PaymentReceived,
    /// Withdrawn before delivery.
    Cancelled,
    /// Paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Under dispute.
    Disputed,
    /// Refunded to the client.
    Refunded,
}

impl PodStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::ReadyForDelivery => "Ready for Delivery",
            Self::Delivered => "Delivered",
            Self::PaymentReceived => "Payment Received",
            Self::Cancelled => "Cancelled",
            Self::OnHold => "On Hold",
            Self::Disputed => "Disputed",
            Self::Refunded => "Refunded",
        }
    }

    /// Returns true if no further transitions may leave this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::PaymentReceived | Self::Cancelled | Self::Refunded)
    }

    /// Statuses reachable from this one.
    #[must_use]
    pub const fn next_statuses(&self) -> &'static [Self] {
        match self {
            Self::Available => &[Self::Assigned, Self::OnHold, Self::Cancelled],
            Self::Assigned => &[
                Self::InProgress,
                Self::Available,
                Self::OnHold,
                Self::Cancelled,
            ],
            Self::InProgress => &[
                Self::ReadyForDelivery,
                Self::OnHold,
                Self::Disputed,
                Self::Cancelled,
            ],
            Self::ReadyForDelivery => &[Self::Delivered, Self::OnHold, Self::Disputed],
            Self::Delivered => &[Self::PaymentReceived, Self::Disputed, Self::Refunded],
            Self::OnHold => &[
                Self::Available,
                Self::Assigned,
                Self::InProgress,
                Self::Cancelled,
            ],
            Self::Disputed => &[Self::InProgress, Self::Refunded, Self::Cancelled],
            Self::PaymentReceived | Self::Cancelled | Self::Refunded => &[],
        }
    }

    /// Validates a transition from this status to `to`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPodTransition` if `to` is not reachable
    /// from this status.
    pub fn validate_transition(&self, to: Self) -> Result<(), DomainError> {
        if self.next_statuses().contains(&to) {
            return Ok(());
        }
        let reason = if self.is_terminal() {
            String::from("status is terminal")
        } else {
            String::from("transition not in lifecycle")
        };
        Err(DomainError::InvalidPodTransition {
            from: self.as_str().to_string(),
            to: to.as_str().to_string(),
            reason,
        })
    }
}

impl FromStr for PodStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Assigned" => Ok(Self::Assigned),
            "In Progress" => Ok(Self::InProgress),
            "Ready for Delivery" => Ok(Self::ReadyForDelivery),
            "Delivered" => Ok(Self::Delivered),
            "Payment Received" => Ok(Self::PaymentReceived),
            "Cancelled" => Ok(Self::Cancelled),
            "On Hold" => Ok(Self::OnHold),
            "Disputed" => Ok(Self::Disputed),
            "Refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidPodStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A print-on-delivery order with its payment tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodOrder {
    /// Stable unique identifier.
    pub id: String,
    /// Description of the deliverable.
    pub title: String,
    /// Name of the receiving client.
    pub client_name: String,
    /// Delivery destination.
    pub delivery_address: String,
    /// Amount payable on delivery, in KES.
    pub amount_kes: f64,
    /// Current lifecycle status.
    pub status: PodStatus,
    /// The user handling the delivery, once assigned.
    pub assigned_to: Option<String>,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last mutation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// When the deliverable reached the client.
    #[serde(with = "time::serde::rfc3339::option")]
    pub delivered_at: Option<OffsetDateTime>,
    /// When payment was collected.
    #[serde(with = "time::serde::rfc3339::option")]
    pub paid_at: Option<OffsetDateTime>,
}

impl PodOrder {
    /// Creates a new available POD order.
    #[must_use]
    pub const fn new(
        id: String,
        title: String,
        client_name: String,
        delivery_address: String,
        amount_kes: f64,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            title,
            client_name,
            delivery_address,
            amount_kes,
            status: PodStatus::Available,
            assigned_to: None,
            created_at,
            updated_at: created_at,
            delivered_at: None,
            paid_at: None,
        }
    }

    /// Moves the order to a new status after validating the transition.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPodTransition` if the move is not in
    /// the lifecycle.
    pub fn transition(&mut self, to: PodStatus, now: OffsetDateTime) -> Result<(), DomainError> {
        self.status.validate_transition(to)?;
        self.status = to;
        self.updated_at = now;
        Ok(())
    }

    /// Records delivery to the client.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPodTransition` unless the order is
    /// ready for delivery.
    pub fn record_delivery(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        self.transition(PodStatus::Delivered, now)?;
        self.delivered_at = Some(now);
        Ok(())
    }

    /// Records payment collection, settling the order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPodTransition` unless the order has
    /// been delivered.
    pub fn record_payment(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        self.transition(PodStatus::PaymentReceived, now)?;
        self.paid_at = Some(now);
        Ok(())
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The order aggregate and its owned records.
//!
//! An [`Order`] is the sole mutable aggregate in the system. Bids, files,
//! and revision requests are owned by their parent order and never outlive
//! it. Bids are never removed, only status-updated, so bid history is
//! preserved.

use crate::error::DomainError;
use crate::pricing::Urgency;
use crate::status::OrderStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Duration, OffsetDateTime};

/// Clock-skew tolerance for the revision-file freshness rule.
///
/// A file only counts as a new revision file when it was uploaded strictly
/// more than this long after the admin review timestamp, so a pre-existing
/// file written in the same instant as the review cannot satisfy a
/// revision requirement.
pub const REVISION_FRESHNESS_TOLERANCE: Duration = Duration::milliseconds(1000);

/// Who placed an order with a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickedBy {
    /// The writer picked the order themselves.
    Writer,
    /// An admin assigned the order directly.
    Admin,
}

/// Resolution state of a writer's bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    /// Placed and awaiting an admin decision.
    Pending,
    /// Accepted; the order was assigned to this bid's writer.
    Approved,
    /// Rejected, either explicitly or because a sibling bid won.
    Declined,
}

impl BidStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }
}

impl FromStr for BidStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidBidStatus(s.to_string())),
        }
    }
}

/// A writer's claim on an available order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Unique bid identifier.
    pub id: String,
    /// The bidding writer.
    pub writer_id: String,
    /// The writer's display name at bid time.
    pub writer_name: String,
    /// Optional pitch accompanying the bid.
    pub bid_notes: Option<String>,
    /// When the bid was placed.
    #[serde(with = "time::serde::rfc3339")]
    pub bid_at: OffsetDateTime,
    /// Resolution state.
    pub status: BidStatus,
}

impl Bid {
    /// Creates a new pending bid.
    #[must_use]
    pub const fn new(
        id: String,
        writer_id: String,
        writer_name: String,
        bid_notes: Option<String>,
        bid_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            writer_id,
            writer_name,
            bid_notes,
            bid_at,
            status: BidStatus::Pending,
        }
    }
}

/// Metadata for a file attached to an order.
///
/// Only presence and timestamps matter to the engine; binary content lives
/// with an external file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFile {
    /// Unique file identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// External storage URL, if uploaded.
    pub url: Option<String>,
    /// The user who uploaded the file.
    pub uploaded_by: Option<String>,
    /// Upload timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
}

/// Lifecycle of a single revision request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionRequestState {
    /// Requested and not yet resubmitted.
    Open,
    /// The writer resubmitted work addressing the request.
    Resolved,
}

/// One admin-requested revision round, kept append-only on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRequest {
    /// Unique request identifier.
    pub id: String,
    /// When the admin requested the revision.
    #[serde(with = "time::serde::rfc3339")]
    pub requested_at: OffsetDateTime,
    /// The admin's explanation (always non-empty).
    pub explanation: String,
    /// Optional revision category supplied by the admin.
    pub revision_type: Option<String>,
    /// Optional priority supplied by the admin.
    pub priority: Option<String>,
    /// Specific areas of the work the admin flagged.
    pub areas: Vec<String>,
    /// Whether the request has been addressed.
    pub state: RevisionRequestState,
}

/// A unit of billable writing work tracked through the status lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stable unique identifier.
    pub id: String,
    /// Order title.
    pub title: String,
    /// Academic discipline (free-form classification).
    pub discipline: String,
    /// Paper type (essay, thesis, report, ...).
    pub paper_type: String,
    /// Citation format (APA, MLA, ...).
    pub format: String,
    /// Page count.
    pub pages: u32,
    /// Word count.
    pub words: u32,
    /// Cost per page in KES; `None` means the platform default applies.
    pub cpp: Option<f64>,
    /// Urgency level used for price adjustment.
    pub urgency: Urgency,
    /// Total price in KES, when fixed at creation.
    pub total_price_kes: Option<f64>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Who claimed the order, once assigned.
    pub picked_by: Option<PickedBy>,
    /// The owning writer, once assigned.
    pub writer_id: Option<String>,
    /// The owning writer's display name.
    pub writer_name: Option<String>,
    /// Delivery deadline.
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last mutation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// When the order was assigned to its writer.
    #[serde(with = "time::serde::rfc3339::option")]
    pub assigned_at: Option<OffsetDateTime>,
    /// When the writer submitted work for review.
    #[serde(with = "time::serde::rfc3339::option")]
    pub submitted_to_admin_at: Option<OffsetDateTime>,
    /// When the admin last reviewed the submission.
    #[serde(with = "time::serde::rfc3339::option")]
    pub admin_reviewed_at: Option<OffsetDateTime>,
    /// When the order reached `Completed`.
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    /// Number of revision rounds requested so far.
    pub revision_count: u32,
    /// Quality score, starting at 10 and reduced per revision round.
    pub revision_score: u8,
    /// The latest revision explanation.
    pub revision_explanation: Option<String>,
    /// When the writer last resubmitted revised work.
    #[serde(with = "time::serde::rfc3339::option")]
    pub revision_submitted_at: Option<OffsetDateTime>,
    /// Append-only history of revision rounds.
    pub revision_requests: Vec<RevisionRequest>,
    /// All bids ever placed, never removed.
    pub bids: Vec<Bid>,
    /// Files from the original submission rounds.
    pub original_files: Vec<OrderFile>,
    /// Files uploaded while in revision.
    pub revision_files: Vec<OrderFile>,
}

impl Order {
    /// Starting revision score for a fresh order.
    pub const INITIAL_REVISION_SCORE: u8 = 10;

    /// Creates a new draft order with empty history.
    ///
    /// Classification, pricing, and urgency default to neutral values and
    /// may be set directly on the returned order.
    #[must_use]
    pub fn new(
        id: String,
        title: String,
        pages: u32,
        deadline: OffsetDateTime,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            title,
            discipline: String::new(),
            paper_type: String::new(),
            format: String::new(),
            pages,
            words: 0,
            cpp: None,
            urgency: Urgency::Normal,
            total_price_kes: None,
            status: OrderStatus::Draft,
            picked_by: None,
            writer_id: None,
            writer_name: None,
            deadline,
            created_at,
            updated_at: created_at,
            assigned_at: None,
            submitted_to_admin_at: None,
            admin_reviewed_at: None,
            completed_at: None,
            revision_count: 0,
            revision_score: Self::INITIAL_REVISION_SCORE,
            revision_explanation: None,
            revision_submitted_at: None,
            revision_requests: Vec::new(),
            bids: Vec::new(),
            original_files: Vec::new(),
            revision_files: Vec::new(),
        }
    }

    /// Finds a bid by its identifier.
    #[must_use]
    pub fn find_bid(&self, bid_id: &str) -> Option<&Bid> {
        self.bids.iter().find(|b| b.id == bid_id)
    }

    /// Returns all bids still pending, in insertion order.
    #[must_use]
    pub fn pending_bids(&self) -> Vec<&Bid> {
        self.bids
            .iter()
            .filter(|b| b.status == BidStatus::Pending)
            .collect()
    }

    /// Returns the approved bid, if any.
    ///
    /// At most one bid per order may ever be approved.
    #[must_use]
    pub fn approved_bid(&self) -> Option<&Bid> {
        self.bids.iter().find(|b| b.status == BidStatus::Approved)
    }

    /// Checks whether a writer already holds a pending bid on this order.
    #[must_use]
    pub fn has_pending_bid_from(&self, writer_id: &str) -> bool {
        self.bids
            .iter()
            .any(|b| b.status == BidStatus::Pending && b.writer_id == writer_id)
    }

    /// Appends a new bid, enforcing the per-writer pending-uniqueness and
    /// single-approval invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePendingBid` if the writer already has
    /// a pending bid, or `DomainError::BidAlreadyApproved` if the order has
    /// already been won by another bid.
    pub fn add_bid(&mut self, bid: Bid) -> Result<(), DomainError> {
        if self.has_pending_bid_from(&bid.writer_id) {
            return Err(DomainError::DuplicatePendingBid {
                order_id: self.id.clone(),
                writer_id: bid.writer_id,
            });
        }
        if let Some(approved) = self.approved_bid() {
            return Err(DomainError::BidAlreadyApproved {
                order_id: self.id.clone(),
                bid_id: approved.id.clone(),
            });
        }
        self.bids.push(bid);
        Ok(())
    }

    /// Returns true if the writer has uploaded at least one submission file.
    #[must_use]
    pub fn has_submission_files(&self) -> bool {
        !self.original_files.is_empty() || !self.revision_files.is_empty()
    }

    /// Checks the revision-file freshness rule.
    ///
    /// A file satisfies the rule only when it was uploaded strictly after
    /// `reviewed_at` plus [`REVISION_FRESHNESS_TOLERANCE`]; a file already
    /// present when the admin requested the revision never qualifies.
    #[must_use]
    pub fn has_fresh_revision_file(&self, reviewed_at: OffsetDateTime) -> bool {
        let threshold = reviewed_at + REVISION_FRESHNESS_TOLERANCE;
        self.revision_files.iter().any(|f| f.uploaded_at > threshold)
    }

    /// Removes a file by id from either file list, returning it if found.
    pub fn remove_file(&mut self, file_id: &str) -> Option<OrderFile> {
        if let Some(pos) = self.original_files.iter().position(|f| f.id == file_id) {
            return Some(self.original_files.remove(pos));
        }
        if let Some(pos) = self.revision_files.iter().position(|f| f.id == file_id) {
            return Some(self.revision_files.remove(pos));
        }
        None
    }
}

/// UI-facing label for a revision round.
///
/// The label is a pure function of the revision counter and is never
/// tracked independently.
#[must_use]
pub fn revision_round_label(revision_count: u32) -> String {
    match revision_count {
        0 => String::from("No revisions"),
        1 => String::from("First revision"),
        2 => String::from("Second revision"),
        n => format!("Revision round {n}"),
    }
}

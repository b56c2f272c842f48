// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod merit;
mod order;
mod performance;
mod pod;
mod pricing;
mod status;

pub use error::DomainError;
pub use merit::{MERIT_NEUTRAL_SCORE, MeritWeights, RankedBid, merit_score, rank_pending_bids};
pub use order::{
    Bid, BidStatus, Order, OrderFile, PickedBy, REVISION_FRESHNESS_TOLERANCE, RevisionRequest,
    RevisionRequestState, revision_round_label,
};
pub use performance::{WriterPerformance, compute_performance};
pub use pod::{PodOrder, PodStatus};
pub use pricing::{
    DEFAULT_CPP_KES, DeadlineBucket, Urgency, compute_price, deadline_bucket, hours_to_deadline,
};
pub use status::OrderStatus;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merit scoring and bid ranking.
//!
//! The ranking is advisory: it orders pending bids by writer merit so an
//! admin can see the strongest candidates first, but it never auto-assigns.
//! Scores are deterministic functions of writer performance, so two calls
//! over the same inputs always produce the same ordering.

use crate::order::{Bid, BidStatus, Order};
use crate::performance::WriterPerformance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Merit score assigned to a writer with no performance history.
///
/// Sits at the midpoint of the 0-100 scale so new writers are neither
/// buried nor boosted.
pub const MERIT_NEUTRAL_SCORE: f64 = 50.0;

/// Weighting of each performance component in the merit score.
///
/// The default weights sum to 100, making the score read as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeritWeights {
    /// Weight of the completion rate component.
    pub completion: f64,
    /// Weight of the average rating component.
    pub rating: f64,
    /// Weight of the on-time delivery component.
    pub on_time: f64,
    /// Weight of the (inverted) revision rate component.
    pub revision: f64,
    /// Weight of the (inverted) rejection rate component.
    pub rejection: f64,
}

impl Default for MeritWeights {
    fn default() -> Self {
        Self {
            completion: 30.0,
            rating: 25.0,
            on_time: 20.0,
            revision: 15.0,
            rejection: 10.0,
        }
    }
}

/// A pending bid paired with the merit score used to order it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBid {
    /// The underlying bid.
    pub bid: Bid,
    /// Merit score of the bidding writer, 0-100 with two decimals.
    pub merit_score: f64,
    /// 1-based position in the ranked list.
    pub rank: u32,
}

/// Computes a writer's merit score from their performance projection.
///
/// Each component is normalized to 0-1 and multiplied by its weight;
/// revision and rejection rates contribute inversely and are clamped so
/// a rate above 100 cannot produce a negative component. The result is
/// rounded to two decimals.
#[must_use]
pub fn merit_score(perf: &WriterPerformance, weights: &MeritWeights) -> f64 {
    let score = weights.completion * (perf.completion_rate / 100.0)
        + weights.rating * (perf.average_rating / 5.0)
        + weights.on_time * (perf.on_time_delivery_rate / 100.0)
        + weights.revision * ((100.0 - perf.revision_rate) / 100.0).max(0.0)
        + weights.rejection * ((100.0 - perf.rejection_rate) / 100.0).max(0.0);
    (score * 100.0).round() / 100.0
}

/// Ranks an order's pending bids by writer merit, best first.
///
/// Writers absent from `performances` receive [`MERIT_NEUTRAL_SCORE`].
/// Ties are broken by bid time, earliest first; the sort is stable, so
/// bids placed at the same instant keep their insertion order. Approved
/// and declined bids never appear in the result.
#[must_use]
pub fn rank_pending_bids(
    order: &Order,
    performances: &HashMap<String, WriterPerformance>,
    weights: &MeritWeights,
) -> Vec<RankedBid> {
    let mut ranked: Vec<RankedBid> = order
        .bids
        .iter()
        .filter(|bid| bid.status == BidStatus::Pending)
        .map(|bid| RankedBid {
            bid: bid.clone(),
            merit_score: performances
                .get(&bid.writer_id)
                .map_or(MERIT_NEUTRAL_SCORE, |perf| merit_score(perf, weights)),
            rank: 0,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.merit_score
            .partial_cmp(&a.merit_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.bid.bid_at.cmp(&b.bid.bid_at))
    });

    for (index, entry) in ranked.iter_mut().enumerate() {
        entry.rank = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
    ranked
}

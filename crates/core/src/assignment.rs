// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid resolution and ranking.
//!
//! `resolve_approval` is the heart of the assignment engine: approving
//! one bid, declining every other pending sibling, and assigning the
//! order are applied to a single order value as one unit, so a caller
//! committing the result can never expose a half-resolved state.

use crate::error::CoreError;
use inkdesk_domain::{
    BidStatus, MeritWeights, Order, OrderStatus, PickedBy, RankedBid, WriterPerformance,
    compute_performance, rank_pending_bids,
};
use std::collections::HashMap;
use time::OffsetDateTime;

/// Resolves a bid approval on the given order value.
///
/// The target bid becomes `approved`, every other pending bid becomes
/// `declined` (irrevocably), and the order is assigned to the winning
/// writer. The order value is mutated in place; callers pass a clone and
/// commit it atomically.
///
/// # Errors
///
/// Returns `CoreError::BidNotFound` if the bid does not exist on the
/// order, or `CoreError::BidNotPending` if it was already resolved —
/// including on re-approval of an already-approved bid, which fails
/// cleanly instead of re-running side effects.
pub fn resolve_approval(
    order: &mut Order,
    bid_id: &str,
    now: OffsetDateTime,
) -> Result<String, CoreError> {
    let target = order
        .find_bid(bid_id)
        .ok_or_else(|| CoreError::BidNotFound {
            order_id: order.id.clone(),
            bid_id: bid_id.to_string(),
        })?;
    if target.status != BidStatus::Pending {
        return Err(CoreError::BidNotPending {
            order_id: order.id.clone(),
            bid_id: bid_id.to_string(),
            status: target.status,
        });
    }
    let writer_id = target.writer_id.clone();
    let writer_name = target.writer_name.clone();

    for bid in &mut order.bids {
        if bid.id == bid_id {
            bid.status = BidStatus::Approved;
        } else if bid.status == BidStatus::Pending {
            bid.status = BidStatus::Declined;
        }
    }
    order.writer_id = Some(writer_id.clone());
    order.writer_name = Some(writer_name);
    order.picked_by = Some(PickedBy::Writer);
    order.status = OrderStatus::Assigned;
    order.assigned_at = Some(now);

    Ok(writer_id)
}

/// Resolves a bid decline on the given order value.
///
/// Only the target bid changes; the order remains open for other bids.
///
/// # Errors
///
/// Returns `CoreError::BidNotFound` or `CoreError::BidNotPending` as for
/// [`resolve_approval`].
pub fn resolve_decline(order: &mut Order, bid_id: &str) -> Result<(), CoreError> {
    let target = order
        .find_bid(bid_id)
        .ok_or_else(|| CoreError::BidNotFound {
            order_id: order.id.clone(),
            bid_id: bid_id.to_string(),
        })?;
    if target.status != BidStatus::Pending {
        return Err(CoreError::BidNotPending {
            order_id: order.id.clone(),
            bid_id: bid_id.to_string(),
            status: target.status,
        });
    }
    for bid in &mut order.bids {
        if bid.id == bid_id {
            bid.status = BidStatus::Declined;
        }
    }
    Ok(())
}

/// Ranks an order's pending bids by writer merit over the full order set.
///
/// Each bidder's performance is aggregated from `all_orders` with the
/// injected `average_rating`; writers with no order history fall back to
/// the neutral score rather than a zero-history projection.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if `average_rating` is outside
/// the 0-5 scale.
pub fn ranked_bids(
    order: &Order,
    all_orders: &[Order],
    average_rating: f64,
) -> Result<Vec<RankedBid>, CoreError> {
    let mut performances: HashMap<String, WriterPerformance> = HashMap::new();
    for bid in order.pending_bids() {
        if performances.contains_key(&bid.writer_id) {
            continue;
        }
        let perf = compute_performance(&bid.writer_id, all_orders, average_rating)?;
        if perf.total_orders > 0 {
            performances.insert(bid.writer_id.clone(), perf);
        }
    }
    Ok(rank_pending_bids(
        order,
        &performances,
        &MeritWeights::default(),
    ))
}

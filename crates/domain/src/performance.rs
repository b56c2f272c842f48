// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writer performance aggregation.
//!
//! Performance is a derived projection, recomputed on demand from the full
//! order history. There is no cached, independently-mutable copy; that is
//! what keeps ranking decisions free of staleness bugs.

use crate::error::DomainError;
use crate::order::Order;
use crate::pricing::DEFAULT_CPP_KES;
use crate::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Aggregated historical performance for one writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterPerformance {
    /// The writer this projection describes.
    pub writer_id: String,
    /// Orders ever assigned to the writer.
    pub total_orders: u32,
    /// Orders the writer carried to `Completed`.
    pub completed_orders: u32,
    /// Completed share of all orders, 0-100.
    pub completion_rate: f64,
    /// Share of completed orders delivered on or before deadline, 0-100.
    ///
    /// Defaults to 100 when the writer has no completed orders, so an
    /// untested writer is not penalized.
    pub on_time_delivery_rate: f64,
    /// Share of the writer's orders currently in `Revision`, 0-100.
    pub revision_rate: f64,
    /// Share of the writer's orders currently in `Rejected`, 0-100.
    pub rejection_rate: f64,
    /// Average client rating on a 0-5 scale (injected, see below).
    pub average_rating: f64,
    /// Sum of order values over completed and approved orders, in KES.
    pub total_earnings: f64,
}

/// Price attributed to an order for earnings purposes.
///
/// Uses the fixed `total_price_kes` when present, otherwise falls back to
/// `pages × cpp` with the platform default rate.
#[must_use]
pub(crate) fn order_value_kes(order: &Order) -> f64 {
    order
        .total_price_kes
        .unwrap_or_else(|| f64::from(order.pages) * order.cpp.unwrap_or(DEFAULT_CPP_KES))
}

/// Computes a writer's performance projection over the full order set.
///
/// `average_rating` is an injectable input on the 0-5 scale; the engine
/// deliberately does not own a review system, so the caller supplies the
/// rating source.
///
/// # Errors
///
/// Returns `DomainError::InvalidRating` if `average_rating` is outside
/// the 0.0-5.0 range.
#[allow(clippy::cast_precision_loss)]
pub fn compute_performance(
    writer_id: &str,
    all_orders: &[Order],
    average_rating: f64,
) -> Result<WriterPerformance, DomainError> {
    if !(0.0..=5.0).contains(&average_rating) || average_rating.is_nan() {
        return Err(DomainError::InvalidRating {
            rating: average_rating,
        });
    }

    let writer_orders: Vec<&Order> = all_orders
        .iter()
        .filter(|o| o.writer_id.as_deref() == Some(writer_id))
        .collect();

    let total_orders = writer_orders.len() as u32;
    let completed: Vec<&&Order> = writer_orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .collect();
    let completed_orders = completed.len() as u32;

    let completion_rate = if total_orders == 0 {
        0.0
    } else {
        f64::from(completed_orders) / f64::from(total_orders) * 100.0
    };

    let on_time_delivery_rate = if completed.is_empty() {
        100.0
    } else {
        let on_time = completed
            .iter()
            .filter(|o| o.completed_at.is_some_and(|done| done <= o.deadline))
            .count() as f64;
        on_time / completed.len() as f64 * 100.0
    };

    let rate_of = |status: OrderStatus| {
        if total_orders == 0 {
            0.0
        } else {
            let count = writer_orders.iter().filter(|o| o.status == status).count() as f64;
            count / f64::from(total_orders) * 100.0
        }
    };
    let revision_rate = rate_of(OrderStatus::Revision);
    let rejection_rate = rate_of(OrderStatus::Rejected);

    let total_earnings = writer_orders
        .iter()
        .filter(|o| matches!(o.status, OrderStatus::Completed | OrderStatus::Approved))
        .map(|o| order_value_kes(o))
        .sum();

    Ok(WriterPerformance {
        writer_id: writer_id.to_string(),
        total_orders,
        completed_orders,
        completion_rate,
        on_time_delivery_rate,
        revision_rate,
        rejection_rate,
        average_rating,
        total_earnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    fn writer_order(id: &str, writer: &str, status: OrderStatus) -> Order {
        let created = datetime!(2026-08-01 09:00 UTC);
        let mut order = Order::new(
            id.to_string(),
            format!("Order {id}"),
            4,
            created + Duration::days(10),
            created,
        );
        order.writer_id = Some(writer.to_string());
        order.status = status;
        order
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_fresh_writer_has_neutral_defaults() {
        let perf = compute_performance("w1", &[], 4.5).expect("valid rating");

        assert_eq!(perf.total_orders, 0);
        assert!((perf.completion_rate - 0.0).abs() < f64::EPSILON);
        assert!((perf.on_time_delivery_rate - 100.0).abs() < f64::EPSILON);
        assert!((perf.total_earnings - 0.0).abs() < f64::EPSILON);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_completion_rate_over_all_writer_orders() {
        let mut done = writer_order("O1", "w1", OrderStatus::Completed);
        done.completed_at = Some(done.deadline - Duration::hours(1));
        let orders = vec![
            done,
            writer_order("O2", "w1", OrderStatus::InProgress),
            writer_order("O3", "w1", OrderStatus::Revision),
            writer_order("O4", "w1", OrderStatus::Rejected),
            // Another writer's order must not count.
            writer_order("O5", "w2", OrderStatus::Completed),
        ];

        let perf = compute_performance("w1", &orders, 4.0).expect("valid rating");
        assert_eq!(perf.total_orders, 4);
        assert_eq!(perf.completed_orders, 1);
        assert!((perf.completion_rate - 25.0).abs() < f64::EPSILON);
        assert!((perf.revision_rate - 25.0).abs() < f64::EPSILON);
        assert!((perf.rejection_rate - 25.0).abs() < f64::EPSILON);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_on_time_rate_only_counts_completed_orders() {
        let mut on_time = writer_order("O1", "w1", OrderStatus::Completed);
        on_time.completed_at = Some(on_time.deadline - Duration::hours(2));
        let mut late = writer_order("O2", "w1", OrderStatus::Completed);
        late.completed_at = Some(late.deadline + Duration::hours(6));
        let orders = vec![
            on_time,
            late,
            writer_order("O3", "w1", OrderStatus::InProgress),
        ];

        let perf = compute_performance("w1", &orders, 4.0).expect("valid rating");
        assert!((perf.on_time_delivery_rate - 50.0).abs() < f64::EPSILON);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_earnings_use_fixed_price_or_page_fallback() {
        let mut fixed = writer_order("O1", "w1", OrderStatus::Completed);
        fixed.total_price_kes = Some(5000.0);
        let mut fallback = writer_order("O2", "w1", OrderStatus::Approved);
        fallback.cpp = Some(400.0); // 4 pages x 400

        let orders = vec![
            fixed,
            fallback,
            // Default-rate fallback: 4 pages x 350.
            writer_order("O3", "w1", OrderStatus::Completed),
            // Not yet payable.
            writer_order("O4", "w1", OrderStatus::Submitted),
        ];

        let perf = compute_performance("w1", &orders, 4.0).expect("valid rating");
        assert!((perf.total_earnings - (5000.0 + 1600.0 + 1400.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_outside_scale_rejected() {
        assert!(compute_performance("w1", &[], 5.5).is_err());
        assert!(compute_performance("w1", &[], -0.1).is_err());
    }
}

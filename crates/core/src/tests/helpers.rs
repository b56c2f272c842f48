// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inkdesk_audit::{Actor, Cause, Role};
use inkdesk_domain::{Bid, Order, OrderFile, OrderStatus, PickedBy};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Fixed creation instant shared by all fixtures.
pub const T0: OffsetDateTime = datetime!(2026-08-20 09:00 UTC);

pub fn admin_actor() -> Actor {
    Actor::new(String::from("admin-1"), Role::Admin)
}

pub fn writer_actor(id: &str) -> Actor {
    Actor::new(id.to_string(), Role::Writer)
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn draft_order(id: &str) -> Order {
    Order::new(
        id.to_string(),
        format!("Order {id}"),
        4,
        T0 + Duration::days(10),
        T0,
    )
}

pub fn available_order(id: &str) -> Order {
    let mut order = draft_order(id);
    order.status = OrderStatus::Available;
    order
}

pub fn test_bid(id: &str, writer_id: &str, bid_at: OffsetDateTime) -> Bid {
    Bid::new(
        id.to_string(),
        writer_id.to_string(),
        format!("Writer {writer_id}"),
        None,
        bid_at,
    )
}

pub fn available_order_with_bids(id: &str, bids: usize) -> Order {
    let mut order = available_order(id);
    for i in 1..=bids {
        let offset = Duration::minutes(i64::try_from(i).expect("small index"));
        order
            .add_bid(test_bid(&format!("BID-{i}"), &format!("w{i}"), T0 + offset))
            .expect("bid accepted");
    }
    order
}

pub fn assigned_order(id: &str, writer_id: &str) -> Order {
    let mut order = available_order(id);
    order.status = OrderStatus::Assigned;
    order.writer_id = Some(writer_id.to_string());
    order.writer_name = Some(format!("Writer {writer_id}"));
    order.picked_by = Some(PickedBy::Writer);
    order.assigned_at = Some(T0 + Duration::hours(1));
    order
}

pub fn in_progress_order(id: &str, writer_id: &str) -> Order {
    let mut order = assigned_order(id, writer_id);
    order.status = OrderStatus::InProgress;
    order
}

pub fn submitted_order(id: &str, writer_id: &str) -> Order {
    let mut order = in_progress_order(id, writer_id);
    order
        .original_files
        .push(test_file("F-1", writer_id, T0 + Duration::hours(2)));
    order.status = OrderStatus::Submitted;
    order.submitted_to_admin_at = Some(T0 + Duration::hours(3));
    order
}

pub fn test_file(id: &str, uploaded_by: &str, uploaded_at: OffsetDateTime) -> OrderFile {
    OrderFile {
        id: id.to_string(),
        name: format!("{id}.docx"),
        size: 1024,
        url: None,
        uploaded_by: Some(uploaded_by.to_string()),
        uploaded_at,
    }
}

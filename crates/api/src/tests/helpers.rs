// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{ActionRequest, CreateOrderRequest};
use crate::service::OrderService;
use inkdesk_store::{FixedClock, MemoryOrderStore, MemoryPodStore, NullNotifier};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use time::macros::datetime;

pub const T0: OffsetDateTime = datetime!(2026-08-20 09:00 UTC);

pub fn service() -> OrderService {
    OrderService::new(
        Arc::new(MemoryOrderStore::new()),
        Arc::new(MemoryPodStore::new()),
        Arc::new(FixedClock(T0)),
        Arc::new(NullNotifier),
    )
}

pub fn create_request(id: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        id: id.to_string(),
        title: format!("Order {id}"),
        discipline: Some(String::from("History")),
        paper_type: Some(String::from("Essay")),
        format: Some(String::from("APA")),
        pages: 4,
        words: Some(1100),
        cpp: None,
        urgency: None,
        deadline: T0 + Duration::days(10),
    }
}

pub fn action(action: &str, actor_id: &str, actor_role: &str) -> ActionRequest {
    ActionRequest {
        action: action.to_string(),
        actor_id: actor_id.to_string(),
        actor_role: actor_role.to_string(),
        cause_id: None,
        cause_description: None,
        bid_id: None,
        new_bid_id: None,
        writer_id: None,
        writer_name: None,
        notes: None,
        explanation: None,
        revision_type: None,
        revision_priority: None,
        revision_areas: Vec::new(),
        files: Vec::new(),
        revision_request_id: None,
        file_id: None,
    }
}

pub fn admin_action(name: &str) -> ActionRequest {
    action(name, "adm-1", "admin")
}

pub fn writer_action(name: &str, writer_id: &str) -> ActionRequest {
    action(name, writer_id, "writer")
}

pub fn bid_request(bid_id: &str, writer_id: &str) -> ActionRequest {
    let mut req = writer_action("bid", writer_id);
    req.new_bid_id = Some(bid_id.to_string());
    req.writer_id = Some(writer_id.to_string());
    req.writer_name = Some(format!("Writer {writer_id}"));
    req
}

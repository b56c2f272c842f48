// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    T0, admin_actor, submitted_order, test_cause, test_file, writer_actor,
};
use crate::{ActionPayload, EngineEvent, OrderAction, apply};
use inkdesk_domain::{Order, OrderStatus, RevisionRequestState, revision_round_label};
use time::{Duration, OffsetDateTime};

fn revision_payload(explanation: &str) -> ActionPayload {
    ActionPayload {
        explanation: Some(explanation.to_string()),
        ..ActionPayload::default()
    }
}

/// Runs one full revision round: request at `now`, upload a fresh file,
/// resubmit an hour later. Returns the resubmitted order.
fn run_revision_round(order: &Order, now: OffsetDateTime, round: u32) -> Order {
    let requested = apply(
        order,
        OrderAction::RequestRevision,
        revision_payload(&format!("Round {round}: tighten the argument")),
        &admin_actor(),
        test_cause(),
        now,
    )
    .expect("revision request succeeds")
    .new_order;

    let upload_at = now + Duration::minutes(30);
    let uploaded = apply(
        &requested,
        OrderAction::UploadFiles,
        ActionPayload {
            files: vec![test_file(&format!("F-rev-{round}"), "w1", upload_at)],
            ..ActionPayload::default()
        },
        &writer_actor("w1"),
        test_cause(),
        upload_at,
    )
    .expect("upload succeeds")
    .new_order;

    apply(
        &uploaded,
        OrderAction::Resubmit,
        ActionPayload::default(),
        &writer_actor("w1"),
        test_cause(),
        now + Duration::hours(1),
    )
    .expect("resubmit succeeds")
    .new_order
}

#[test]
fn test_revision_count_equals_rounds_requested() {
    let mut order = submitted_order("ORD-1", "w1");
    let mut now = T0 + Duration::hours(5);

    for round in 1..=3 {
        order = run_revision_round(&order, now, round);
        assert_eq!(order.revision_count, round);
        assert_eq!(order.status, OrderStatus::Submitted);
        now += Duration::hours(2);
    }
}

#[test]
fn test_revision_request_bookkeeping() {
    let order = submitted_order("ORD-1", "w1");
    let now = T0 + Duration::hours(5);
    let payload = ActionPayload {
        explanation: Some(String::from("Citations are incomplete")),
        revision_type: Some(String::from("citations")),
        revision_priority: Some(String::from("high")),
        revision_areas: vec![String::from("references"), String::from("introduction")],
        ..ActionPayload::default()
    };

    let result = apply(
        &order,
        OrderAction::RequestRevision,
        payload,
        &admin_actor(),
        test_cause(),
        now,
    )
    .expect("revision request succeeds");

    let new_order = &result.new_order;
    assert_eq!(new_order.status, OrderStatus::Revision);
    assert_eq!(new_order.revision_count, 1);
    assert_eq!(new_order.admin_reviewed_at, Some(now));
    assert_eq!(
        new_order.revision_explanation.as_deref(),
        Some("Citations are incomplete")
    );
    assert_eq!(new_order.revision_requests.len(), 1);
    let request = &new_order.revision_requests[0];
    assert_eq!(request.requested_at, now);
    assert_eq!(request.state, RevisionRequestState::Open);
    assert_eq!(request.areas.len(), 2);
    assert_eq!(
        result.events,
        vec![EngineEvent::RevisionRequested {
            order_id: String::from("ORD-1"),
            round: 1,
        }]
    );
}

#[test]
fn test_revision_score_decreases_per_round_with_zero_floor() {
    let mut order = submitted_order("ORD-1", "w1");
    assert_eq!(order.revision_score, 10);

    let mut now = T0 + Duration::hours(5);
    for round in 1..=12 {
        order = run_revision_round(&order, now, round);
        let expected = 10u8.saturating_sub(u8::try_from(round).expect("small round"));
        assert_eq!(order.revision_score, expected);
        now += Duration::hours(2);
    }
    assert_eq!(order.revision_score, 0);
    assert_eq!(order.revision_count, 12);
}

#[test]
fn test_resubmit_resolves_open_requests() {
    let order = submitted_order("ORD-1", "w1");
    let now = T0 + Duration::hours(5);

    let resubmitted = run_revision_round(&order, now, 1);

    assert_eq!(resubmitted.revision_requests.len(), 1);
    assert_eq!(
        resubmitted.revision_requests[0].state,
        RevisionRequestState::Resolved
    );
    assert!(resubmitted.revision_submitted_at.is_some());
}

#[test]
fn test_interleaved_actions_do_not_disturb_counter() {
    let order = submitted_order("ORD-1", "w1");
    let now = T0 + Duration::hours(5);
    let after_round = run_revision_round(&order, now, 1);

    // An unrelated legal action between rounds.
    let upload_at = now + Duration::hours(3);
    let rejected = apply(
        &after_round,
        OrderAction::Reject,
        ActionPayload::default(),
        &admin_actor(),
        test_cause(),
        upload_at,
    )
    .expect("reject succeeds");

    assert_eq!(rejected.new_order.revision_count, 1);
    assert_eq!(rejected.new_order.revision_score, 9);
}

#[test]
fn test_round_labels_follow_counter() {
    assert_eq!(revision_round_label(0), "No revisions");
    assert_eq!(revision_round_label(1), "First revision");
    assert_eq!(revision_round_label(2), "Second revision");
    assert_eq!(revision_round_label(7), "Revision round 7");
}

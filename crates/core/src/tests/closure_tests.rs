// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{T0, admin_actor, available_order, test_cause};
use crate::{ActionPayload, CoreError, OrderAction, apply, is_legal, legal_sources};
use inkdesk_domain::OrderStatus;
use time::Duration;

#[test]
fn test_every_unlisted_pair_is_invalid_transition() {
    let now = T0 + Duration::hours(1);
    for status in OrderStatus::all() {
        for action in OrderAction::all() {
            if is_legal(*status, *action) {
                continue;
            }
            let mut order = available_order("ORD-closure");
            order.status = *status;
            let pristine = order.clone();

            let result = apply(
                &order,
                *action,
                ActionPayload::default(),
                &admin_actor(),
                test_cause(),
                now,
            );

            assert_eq!(
                result,
                Err(CoreError::InvalidTransition {
                    status: *status,
                    action: *action,
                }),
                "({status}, {action}) must be rejected"
            );
            assert_eq!(order, pristine, "rejected action must not touch the order");
        }
    }
}

#[test]
fn test_terminal_statuses_admit_no_action() {
    for status in [
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ] {
        for action in OrderAction::all() {
            assert!(
                !is_legal(status, *action),
                "{action} must not be legal from terminal status {status}"
            );
        }
    }
}

#[test]
fn test_publish_only_from_draft() {
    assert!(is_legal(OrderStatus::Draft, OrderAction::Publish));
    for status in OrderStatus::all() {
        if *status != OrderStatus::Draft {
            assert!(!is_legal(*status, OrderAction::Publish));
        }
    }
}

#[test]
fn test_bid_actions_only_while_available() {
    for action in [
        OrderAction::Bid,
        OrderAction::ApproveBid,
        OrderAction::DeclineBid,
        OrderAction::Assign,
    ] {
        assert_eq!(legal_sources(action), &[OrderStatus::Available]);
    }
}

#[test]
fn test_review_actions_only_from_submitted() {
    for action in [
        OrderAction::Approve,
        OrderAction::Reject,
        OrderAction::RequestRevision,
    ] {
        assert_eq!(legal_sources(action), &[OrderStatus::Submitted]);
    }
}

#[test]
fn test_file_actions_during_production_only() {
    for action in [OrderAction::UploadFiles, OrderAction::RemoveFile] {
        assert_eq!(
            legal_sources(action),
            &[
                OrderStatus::Assigned,
                OrderStatus::InProgress,
                OrderStatus::Revision,
            ]
        );
    }
}

#[test]
fn test_reassign_only_in_progress() {
    assert_eq!(
        legal_sources(OrderAction::Reassign),
        &[OrderStatus::InProgress]
    );
}

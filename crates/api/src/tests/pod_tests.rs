// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::request_response::{CreatePodRequest, PodActionRequest};
use crate::tests::helpers::{T0, service};
use inkdesk_domain::PodStatus;

fn pod_request(id: &str) -> CreatePodRequest {
    CreatePodRequest {
        id: id.to_string(),
        title: String::from("Bound thesis, 2 copies"),
        client_name: String::from("J. Mwangi"),
        delivery_address: String::from("Westlands, Nairobi"),
        amount_kes: 1200.0,
    }
}

fn transition(to: &str) -> PodActionRequest {
    PodActionRequest {
        action: String::from("transition"),
        to_status: Some(to.to_string()),
        assigned_to: None,
    }
}

fn simple(action: &str) -> PodActionRequest {
    PodActionRequest {
        action: action.to_string(),
        to_status: None,
        assigned_to: None,
    }
}

#[test]
fn test_pod_delivery_and_payment_path() {
    let svc = service();
    let pod = svc.create_pod(pod_request("POD-1")).expect("create");
    assert_eq!(pod.status, PodStatus::Available);

    let mut assign = transition("Assigned");
    assign.assigned_to = Some(String::from("courier-1"));
    let pod = svc.perform_pod_action("POD-1", assign).expect("assign");
    assert_eq!(pod.assigned_to.as_deref(), Some("courier-1"));

    svc.perform_pod_action("POD-1", transition("In Progress"))
        .expect("start");
    svc.perform_pod_action("POD-1", transition("Ready for Delivery"))
        .expect("ready");

    let pod = svc
        .perform_pod_action("POD-1", simple("record_delivery"))
        .expect("deliver");
    assert_eq!(pod.status, PodStatus::Delivered);
    assert_eq!(pod.delivered_at, Some(T0));

    let pod = svc
        .perform_pod_action("POD-1", simple("record_payment"))
        .expect("settle");
    assert_eq!(pod.status, PodStatus::PaymentReceived);
    assert_eq!(pod.paid_at, Some(T0));
}

#[test]
fn test_payment_before_delivery_is_a_rule_violation() {
    let svc = service();
    svc.create_pod(pod_request("POD-1")).expect("create");

    let err = svc
        .perform_pod_action("POD-1", simple("record_payment"))
        .expect_err("not delivered yet");
    assert!(matches!(err, ApiError::RuleViolation { rule, .. } if rule == "pod_lifecycle"));
}

#[test]
fn test_transition_requires_a_target_status() {
    let svc = service();
    svc.create_pod(pod_request("POD-1")).expect("create");

    let err = svc
        .perform_pod_action("POD-1", simple("transition"))
        .expect_err("missing target");
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "toStatus"));
}

#[test]
fn test_unknown_pod_action_rejected() {
    let svc = service();
    svc.create_pod(pod_request("POD-1")).expect("create");

    let err = svc
        .perform_pod_action("POD-1", simple("dispatch"))
        .expect_err("unknown action");
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "action"));
}

#[test]
fn test_unknown_pod_status_rejected() {
    let svc = service();
    svc.create_pod(pod_request("POD-1")).expect("create");

    let err = svc
        .perform_pod_action("POD-1", transition("Shipped"))
        .expect_err("unknown status");
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "podStatus"));
}

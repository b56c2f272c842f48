// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The order service: the one write path into the engine.
//!
//! Every mutation goes load → authorize → apply → commit → notify. The
//! engine's `apply` is pure, so a commit that loses the optimistic
//! concurrency race leaves no partial state; the caller re-reads and
//! retries.

use crate::capabilities::authorize;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_store_error,
};
use crate::request_response::{
    ActionRequest, CreateOrderRequest, CreatePodRequest, OrderQuery, PodActionRequest,
};
use inkdesk::{ActionPayload, OrderAction, apply, ranked_bids};
use inkdesk_audit::{Actor, Cause, Role};
use inkdesk_domain::{
    Order, OrderFile, OrderStatus, PodOrder, PodStatus, RankedBid, Urgency, WriterPerformance,
    compute_performance, compute_price,
};
use inkdesk_store::{Clock, MemoryPodStore, Notifier, OrderStore};
use std::sync::Arc;

/// Rating assumed for writers until a review source is wired in.
pub const DEFAULT_AVERAGE_RATING: f64 = 4.5;

fn parse_role(role: &str) -> Result<Role, ApiError> {
    match role {
        "writer" => Ok(Role::Writer),
        "admin" => Ok(Role::Admin),
        "system" => Ok(Role::System),
        other => Err(ApiError::InvalidInput {
            field: String::from("actorRole"),
            message: format!("'{other}' is not a recognized role"),
        }),
    }
}

/// Application service wiring the engine to storage and notification.
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    pods: Arc<MemoryPodStore>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    average_rating: f64,
}

impl OrderService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderStore>,
        pods: Arc<MemoryPodStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            orders,
            pods,
            clock,
            notifier,
            average_rating: DEFAULT_AVERAGE_RATING,
        }
    }

    /// Overrides the injected average rating used for bid ranking.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the rating is outside the 0-5
    /// scale.
    pub fn with_average_rating(mut self, rating: f64) -> Result<Self, ApiError> {
        if !(0.0..=5.0).contains(&rating) || rating.is_nan() {
            return Err(ApiError::InvalidInput {
                field: String::from("averageRating"),
                message: format!("Invalid rating: {rating}. Must be between 0.0 and 5.0"),
            });
        }
        self.average_rating = rating;
        Ok(self)
    }

    /// Creates a new draft order with its price fixed at creation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for a bad urgency or page count,
    /// or a rule violation if the id is already taken.
    pub fn create_order(&self, req: CreateOrderRequest) -> Result<Order, ApiError> {
        let urgency = match req.urgency.as_deref() {
            Some(s) => s.parse::<Urgency>().map_err(translate_domain_error)?,
            None => Urgency::default(),
        };
        let price = compute_price(req.pages, req.cpp, urgency).map_err(translate_domain_error)?;

        let now = self.clock.now();
        let mut order = Order::new(req.id, req.title, req.pages, req.deadline, now);
        order.discipline = req.discipline.unwrap_or_default();
        order.paper_type = req.paper_type.unwrap_or_default();
        order.format = req.format.unwrap_or_default();
        order.words = req.words.unwrap_or_default();
        order.cpp = req.cpp;
        order.urgency = urgency;
        order.total_price_kes = Some(price);

        self.orders
            .insert(order.clone())
            .map_err(translate_store_error)?;
        tracing::info!(order_id = %order.id, price_kes = price, "order created");
        Ok(order)
    }

    /// Loads one order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if absent.
    pub fn get_order(&self, order_id: &str) -> Result<Order, ApiError> {
        Ok(self
            .orders
            .load(order_id)
            .map_err(translate_store_error)?
            .order)
    }

    /// Lists orders, optionally filtered by status and writer.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an unrecognized status filter.
    pub fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError> {
        let status = match query.status.as_deref() {
            Some(s) => Some(s.parse::<OrderStatus>().map_err(translate_domain_error)?),
            None => None,
        };
        let mut all = self.orders.list().map_err(translate_store_error)?;
        if let Some(status) = status {
            all.retain(|o| o.status == status);
        }
        if let Some(writer_id) = query.writer_id.as_deref() {
            all.retain(|o| o.writer_id.as_deref() == Some(writer_id));
        }
        Ok(all)
    }

    /// Dispatches one lifecycle action against one order.
    ///
    /// The order is loaded at its current version, the pure transition is
    /// applied, and the result is committed against that same version.
    /// Events are only notified after the commit succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` if the role may not perform the
    /// action, a translated engine error if the transition is refused, or
    /// `ApiError::Conflict` if the commit lost a concurrent race.
    pub fn perform_action(&self, order_id: &str, req: ActionRequest) -> Result<Order, ApiError> {
        let action = req
            .action
            .parse::<OrderAction>()
            .map_err(translate_core_error)?;
        let role = parse_role(&req.actor_role)?;
        authorize(role, action)?;

        let versioned = self.orders.load(order_id).map_err(translate_store_error)?;
        let now = self.clock.now();

        let actor = Actor::new(req.actor_id.clone(), role);
        let cause = Cause::new(
            req.cause_id
                .unwrap_or_else(|| format!("api-{order_id}-{action}")),
            req.cause_description
                .unwrap_or_else(|| format!("'{action}' dispatched by {role} {}", req.actor_id)),
        );
        let files = req
            .files
            .into_iter()
            .map(|f| OrderFile {
                id: f.id,
                name: f.name,
                size: f.size,
                url: f.url,
                uploaded_by: Some(req.actor_id.clone()),
                uploaded_at: f.uploaded_at.unwrap_or(now),
            })
            .collect();
        let payload = ActionPayload {
            bid_id: req.bid_id,
            new_bid_id: req.new_bid_id,
            writer_id: req.writer_id,
            writer_name: req.writer_name,
            notes: req.notes,
            explanation: req.explanation,
            revision_type: req.revision_type,
            revision_priority: req.revision_priority,
            revision_areas: req.revision_areas,
            files,
            revision_request_id: req.revision_request_id,
            file_id: req.file_id,
        };

        let result = apply(&versioned.order, action, payload, &actor, cause, now)
            .map_err(translate_core_error)?;
        self.orders
            .commit(result.new_order.clone(), versioned.version)
            .map_err(translate_store_error)?;
        for event in &result.events {
            self.notifier.notify(event);
        }
        tracing::info!(
            order_id,
            action = %action,
            actor_id = %result.audit_event.actor.id,
            before = result.audit_event.before.status.as_str(),
            after = result.audit_event.after.status.as_str(),
            "transition committed"
        );
        Ok(result.new_order)
    }

    /// Ranks an order's pending bids by writer merit.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the order is absent.
    pub fn ranked_bids(&self, order_id: &str) -> Result<Vec<RankedBid>, ApiError> {
        let order = self.get_order(order_id)?;
        let all = self.orders.list().map_err(translate_store_error)?;
        ranked_bids(&order, &all, self.average_rating).map_err(translate_core_error)
    }

    /// Computes one writer's performance projection over all orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the store lock is poisoned.
    pub fn writer_performance(&self, writer_id: &str) -> Result<WriterPerformance, ApiError> {
        let all = self.orders.list().map_err(translate_store_error)?;
        compute_performance(writer_id, &all, self.average_rating).map_err(translate_domain_error)
    }

    /// Creates a new available POD order.
    ///
    /// # Errors
    ///
    /// Returns a rule violation if the id is already taken.
    pub fn create_pod(&self, req: CreatePodRequest) -> Result<PodOrder, ApiError> {
        let pod = PodOrder::new(
            req.id,
            req.title,
            req.client_name,
            req.delivery_address,
            req.amount_kes,
            self.clock.now(),
        );
        self.pods
            .insert(pod.clone())
            .map_err(translate_store_error)?;
        tracing::info!(pod_id = %pod.id, "pod order created");
        Ok(pod)
    }

    /// Loads one POD order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if absent.
    pub fn get_pod(&self, pod_id: &str) -> Result<PodOrder, ApiError> {
        Ok(self.pods.load(pod_id).map_err(translate_store_error)?.pod)
    }

    /// Lists all POD orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the store lock is poisoned.
    pub fn list_pods(&self) -> Result<Vec<PodOrder>, ApiError> {
        self.pods.list().map_err(translate_store_error)
    }

    /// Dispatches one lifecycle action against one POD order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an unknown action or status, a
    /// rule violation for an out-of-lifecycle move, or `ApiError::Conflict`
    /// on a lost commit race.
    pub fn perform_pod_action(
        &self,
        pod_id: &str,
        req: PodActionRequest,
    ) -> Result<PodOrder, ApiError> {
        let versioned = self.pods.load(pod_id).map_err(translate_store_error)?;
        let mut pod = versioned.pod;
        let now = self.clock.now();

        match req.action.as_str() {
            "transition" => {
                let to_status = req.to_status.as_deref().ok_or_else(|| {
                    ApiError::InvalidInput {
                        field: String::from("toStatus"),
                        message: String::from("'transition' requires a target status"),
                    }
                })?;
                let to = to_status
                    .parse::<PodStatus>()
                    .map_err(translate_domain_error)?;
                pod.transition(to, now).map_err(translate_domain_error)?;
                if to == PodStatus::Assigned {
                    pod.assigned_to = req.assigned_to;
                }
            }
            "record_delivery" => pod.record_delivery(now).map_err(translate_domain_error)?,
            "record_payment" => pod.record_payment(now).map_err(translate_domain_error)?,
            other => {
                return Err(ApiError::InvalidInput {
                    field: String::from("action"),
                    message: format!("'{other}' is not a recognized POD action"),
                });
            }
        }

        self.pods
            .commit(pod.clone(), versioned.version)
            .map_err(translate_store_error)?;
        tracing::info!(pod_id, status = pod.status.as_str(), "pod transition committed");
        Ok(pod)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inkdesk::EngineEvent;

/// Fire-and-forget event sink for committed transitions.
///
/// Implementations must not fail or block the caller; notification
/// happens strictly after the transition is committed, so a lost event
/// can never corrupt order state.
pub trait Notifier: Send + Sync {
    /// Dispatches one committed-transition event.
    fn notify(&self, event: &EngineEvent);
}

/// Notifier that logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: &EngineEvent) {
        match event {
            EngineEvent::OrderAvailable { order_id } => {
                tracing::info!(order_id, "order available");
            }
            EngineEvent::BidPlaced {
                order_id,
                bid_id,
                writer_id,
            } => {
                tracing::info!(order_id, bid_id, writer_id, "bid placed");
            }
            EngineEvent::OrderAssigned {
                order_id,
                writer_id,
            } => {
                tracing::info!(order_id, writer_id, "order assigned");
            }
            EngineEvent::OrderSubmitted { order_id } => {
                tracing::info!(order_id, "order submitted for review");
            }
            EngineEvent::RevisionRequested { order_id, round } => {
                tracing::info!(order_id, round, "revision requested");
            }
            EngineEvent::OrderRejected { order_id } => {
                tracing::info!(order_id, "order rejected");
            }
            EngineEvent::OrderCompleted { order_id } => {
                tracing::info!(order_id, "order completed");
            }
        }
    }
}

/// Notifier that drops all events, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &EngineEvent) {}
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory versioned order storage.
//!
//! Each order carries a version counter that increments on every commit.
//! A commit supplies the version it read; a mismatch means another actor
//! committed in between, and the caller must re-read and retry. This is
//! what serializes mutations per order while leaving cross-order
//! operations fully parallel.

use crate::error::StoreError;
use inkdesk_domain::{Order, PodOrder};
use std::collections::HashMap;
use std::sync::RwLock;

/// An order paired with its optimistic-concurrency version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedOrder {
    /// The stored order state.
    pub order: Order,
    /// Version at read time; pass back on commit.
    pub version: u64,
}

/// The persistence contract the engine's callers depend on.
///
/// Loads return a versioned snapshot; commits are atomic per order and
/// reject lost updates. An implementation must never expose a partially
/// committed order.
pub trait OrderStore: Send + Sync {
    /// Inserts a new order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateOrder` if the id is taken.
    fn insert(&self, order: Order) -> Result<(), StoreError>;

    /// Loads an order with its current version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrderNotFound` if absent.
    fn load(&self, order_id: &str) -> Result<VersionedOrder, StoreError>;

    /// Returns all orders, sorted by creation time then id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Commits a new order state read at `expected_version`.
    ///
    /// Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::VersionConflict` if another commit won the
    /// race, or `StoreError::OrderNotFound` if the order was never
    /// inserted.
    fn commit(&self, order: Order, expected_version: u64) -> Result<u64, StoreError>;
}

/// `OrderStore` backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<String, VersionedOrder>>,
}

impl MemoryOrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryOrderStore {
    fn insert(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().map_err(|_| StoreError::LockPoisoned)?;
        if orders.contains_key(&order.id) {
            return Err(StoreError::DuplicateOrder(order.id));
        }
        tracing::debug!(order_id = %order.id, "order inserted");
        orders.insert(order.id.clone(), VersionedOrder { order, version: 1 });
        Ok(())
    }

    fn load(&self, order_id: &str) -> Result<VersionedOrder, StoreError> {
        let orders = self.orders.read().map_err(|_| StoreError::LockPoisoned)?;
        orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<Order> = orders.values().map(|v| v.order.clone()).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    fn commit(&self, order: Order, expected_version: u64) -> Result<u64, StoreError> {
        let mut orders = self.orders.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(stored) = orders.get_mut(&order.id) else {
            return Err(StoreError::OrderNotFound(order.id));
        };
        if stored.version != expected_version {
            tracing::warn!(
                order_id = %order.id,
                expected = expected_version,
                actual = stored.version,
                "commit lost an optimistic-concurrency race"
            );
            return Err(StoreError::VersionConflict {
                order_id: order.id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        stored.order = order;
        stored.version += 1;
        tracing::debug!(order_id = %stored.order.id, version = stored.version, "order committed");
        Ok(stored.version)
    }
}

/// A POD order paired with its version, same contract as orders.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedPodOrder {
    /// The stored POD order state.
    pub pod: PodOrder,
    /// Version at read time; pass back on commit.
    pub version: u64,
}

/// In-memory versioned storage for POD orders.
#[derive(Debug, Default)]
pub struct MemoryPodStore {
    pods: RwLock<HashMap<String, VersionedPodOrder>>,
}

impl MemoryPodStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new POD order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateOrder` if the id is taken.
    pub fn insert(&self, pod: PodOrder) -> Result<(), StoreError> {
        let mut pods = self.pods.write().map_err(|_| StoreError::LockPoisoned)?;
        if pods.contains_key(&pod.id) {
            return Err(StoreError::DuplicateOrder(pod.id));
        }
        pods.insert(pod.id.clone(), VersionedPodOrder { pod, version: 1 });
        Ok(())
    }

    /// Loads a POD order with its current version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrderNotFound` if absent.
    pub fn load(&self, pod_id: &str) -> Result<VersionedPodOrder, StoreError> {
        let pods = self.pods.read().map_err(|_| StoreError::LockPoisoned)?;
        pods.get(pod_id)
            .cloned()
            .ok_or_else(|| StoreError::OrderNotFound(pod_id.to_string()))
    }

    /// Returns all POD orders, sorted by creation time then id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<PodOrder>, StoreError> {
        let pods = self.pods.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<PodOrder> = pods.values().map(|v| v.pod.clone()).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    /// Commits a new POD order state read at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::VersionConflict` on a lost update, or
    /// `StoreError::OrderNotFound` if never inserted.
    pub fn commit(&self, pod: PodOrder, expected_version: u64) -> Result<u64, StoreError> {
        let mut pods = self.pods.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(stored) = pods.get_mut(&pod.id) else {
            return Err(StoreError::OrderNotFound(pod.id));
        };
        if stored.version != expected_version {
            return Err(StoreError::VersionConflict {
                order_id: pod.id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        stored.pod = pod;
        stored.version += 1;
        Ok(stored.version)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use time::Duration;
    use time::macros::datetime;

    fn test_order(id: &str) -> Order {
        let created = datetime!(2026-08-20 09:00 UTC);
        Order::new(
            id.to_string(),
            format!("Order {id}"),
            4,
            created + Duration::days(10),
            created,
        )
    }

    #[test]
    fn test_insert_then_load_round_trip() {
        let store = MemoryOrderStore::new();
        store.insert(test_order("ORD-1")).expect("insert succeeds");

        let loaded = store.load("ORD-1").expect("load succeeds");
        assert_eq!(loaded.order.id, "ORD-1");
        assert_eq!(loaded.version, 1);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = MemoryOrderStore::new();
        store.insert(test_order("ORD-1")).expect("first insert");

        let result = store.insert(test_order("ORD-1"));
        assert_eq!(result, Err(StoreError::DuplicateOrder(String::from("ORD-1"))));
    }

    #[test]
    fn test_commit_bumps_version() {
        let store = MemoryOrderStore::new();
        store.insert(test_order("ORD-1")).expect("insert");

        let loaded = store.load("ORD-1").expect("load");
        let mut order = loaded.order;
        order.title = String::from("Renamed");

        let version = store.commit(order, loaded.version).expect("commit");
        assert_eq!(version, 2);
        let reloaded = store.load("ORD-1").expect("reload");
        assert_eq!(reloaded.order.title, "Renamed");
        assert_eq!(reloaded.version, 2);
    }

    #[test]
    fn test_stale_commit_is_rejected() {
        let store = MemoryOrderStore::new();
        store.insert(test_order("ORD-1")).expect("insert");

        // Two actors read the same version; the slower commit loses.
        let first = store.load("ORD-1").expect("load");
        let second = store.load("ORD-1").expect("load");
        store
            .commit(first.order, first.version)
            .expect("first commit wins");

        let result = store.commit(second.order, second.version);
        assert_eq!(
            result,
            Err(StoreError::VersionConflict {
                order_id: String::from("ORD-1"),
                expected: 1,
                actual: 2,
            })
        );
        // The winning state is intact.
        assert_eq!(store.load("ORD-1").expect("load").version, 2);
    }

    #[test]
    fn test_commit_without_insert_reported() {
        let store = MemoryOrderStore::new();
        let result = store.commit(test_order("ORD-1"), 1);
        assert_eq!(result, Err(StoreError::OrderNotFound(String::from("ORD-1"))));
    }

    #[test]
    fn test_list_sorted_by_creation() {
        let store = MemoryOrderStore::new();
        let mut older = test_order("ORD-B");
        older.created_at = datetime!(2026-08-19 09:00 UTC);
        store.insert(test_order("ORD-A")).expect("insert");
        store.insert(older).expect("insert");

        let all = store.list().expect("list");
        let ids: Vec<&str> = all.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-B", "ORD-A"]);
    }

    #[test]
    fn test_pod_store_versioning() {
        let store = MemoryPodStore::new();
        let pod = PodOrder::new(
            String::from("POD-1"),
            String::from("Bound copy"),
            String::from("Client"),
            String::from("Nairobi CBD"),
            800.0,
            datetime!(2026-08-20 09:00 UTC),
        );
        store.insert(pod).expect("insert");

        let loaded = store.load("POD-1").expect("load");
        let version = store.commit(loaded.pod.clone(), loaded.version).expect("commit");
        assert_eq!(version, 2);
        assert!(matches!(
            store.commit(loaded.pod, loaded.version),
            Err(StoreError::VersionConflict { .. })
        ));
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in the order store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced order does not exist.
    OrderNotFound(String),
    /// An order with this id already exists.
    DuplicateOrder(String),
    /// The commit lost an optimistic-concurrency race; retry with a
    /// fresh read.
    VersionConflict {
        /// The contested order.
        order_id: String,
        /// The version the caller read.
        expected: u64,
        /// The version actually stored.
        actual: u64,
    },
    /// A store lock was poisoned by a panicking holder.
    LockPoisoned,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderNotFound(order_id) => write!(f, "Order '{order_id}' not found"),
            Self::DuplicateOrder(order_id) => {
                write!(f, "Order '{order_id}' already exists")
            }
            Self::VersionConflict {
                order_id,
                expected,
                actual,
            } => write!(
                f,
                "Order '{order_id}' was modified concurrently (expected version {expected}, found {actual})"
            ),
            Self::LockPoisoned => write!(f, "Store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

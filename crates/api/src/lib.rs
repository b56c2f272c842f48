// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod capabilities;
mod error;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use capabilities::{allowed_actions, authorize, role_allows};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_store_error,
};
pub use request_response::{
    ActionRequest, CreateOrderRequest, CreatePodRequest, FilePayload, OrderQuery,
    PodActionRequest,
};
pub use service::{DEFAULT_AVERAGE_RATING, OrderService};

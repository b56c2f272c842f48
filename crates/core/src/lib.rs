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

mod apply;
mod assignment;
mod command;
mod error;
mod state;
mod transitions;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use assignment::{ranked_bids, resolve_approval, resolve_decline};
pub use command::{ActionPayload, OrderAction};
pub use error::{CoreError, GuardViolation};
pub use state::{EngineEvent, TransitionResult};
pub use transitions::{REASSIGN_MIN_HOURS, is_legal, legal_sources};

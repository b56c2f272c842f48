// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing and deadline calculations.
//!
//! These are pure functions exposed on the engine surface so that every
//! collaborator computes prices and deadline buckets identically instead
//! of re-deriving them ad hoc.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Default cost per page, in KES.
pub const DEFAULT_CPP_KES: f64 = 350.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// Urgency level of an order, adjusting the per-page rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    /// Standard turnaround.
    #[default]
    Normal,
    /// Tight turnaround; 20% surcharge.
    Urgent,
    /// Rush turnaround; 50% surcharge.
    VeryUrgent,
}

impl Urgency {
    /// Returns the price multiplier for this urgency level.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Urgent => 1.2,
            Self::VeryUrgent => 1.5,
        }
    }

    /// Returns the string representation of this urgency level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Urgent => "urgent",
            Self::VeryUrgent => "very-urgent",
        }
    }
}

impl FromStr for Urgency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "urgent" => Ok(Self::Urgent),
            "very-urgent" => Ok(Self::VeryUrgent),
            _ => Err(DomainError::InvalidUrgency(s.to_string())),
        }
    }
}

/// Computes the total price of an order in KES.
///
/// Price is `pages × cpp × urgency multiplier`, rounded to whole KES.
/// When no cost-per-page is supplied, [`DEFAULT_CPP_KES`] applies.
///
/// # Errors
///
/// Returns `DomainError::InvalidPages` for a zero page count.
pub fn compute_price(pages: u32, cpp: Option<f64>, urgency: Urgency) -> Result<f64, DomainError> {
    if pages == 0 {
        return Err(DomainError::InvalidPages { pages });
    }
    let rate = cpp.unwrap_or(DEFAULT_CPP_KES);
    Ok((f64::from(pages) * rate * urgency.multiplier()).round())
}

/// Day-granularity deadline classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "bucket", content = "days")]
pub enum DeadlineBucket {
    /// The deadline has passed.
    Overdue(u32),
    /// Due within the current day.
    DueToday,
    /// Due within three days.
    DueSoon(u32),
    /// More than three days remain.
    Comfortable(u32),
}

/// Classifies an order deadline relative to `now`.
///
/// Remaining time is bucketed by ceiling-of-days, matching how deadlines
/// are surfaced to writers: anything inside the next 24 hours is "due
/// today", up to three days out is "due soon".
#[must_use]
pub fn deadline_bucket(deadline: OffsetDateTime, now: OffsetDateTime) -> DeadlineBucket {
    let seconds = (deadline - now).whole_seconds();
    if seconds < 0 {
        let days_over =
            u32::try_from((-seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).unwrap_or(u32::MAX);
        return DeadlineBucket::Overdue(days_over);
    }
    let days_left =
        u32::try_from((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).unwrap_or(u32::MAX);
    match days_left {
        0 | 1 => DeadlineBucket::DueToday,
        2..=3 => DeadlineBucket::DueSoon(days_left),
        _ => DeadlineBucket::Comfortable(days_left),
    }
}

/// Returns the fractional hours remaining until `deadline`.
///
/// Negative when the deadline has passed. Evaluated against wall-clock
/// time at the moment of the action, never at order creation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_to_deadline(deadline: OffsetDateTime, now: OffsetDateTime) -> f64 {
    (deadline - now).whole_seconds() as f64 / 3600.0
}

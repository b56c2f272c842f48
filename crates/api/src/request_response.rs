// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response payloads for the API surface.
//!
//! Wire payloads are camelCase to match the order aggregate's own
//! serialization; responses reuse the domain types directly rather than
//! mirroring them in parallel DTOs.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request to create a new draft order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Stable unique identifier for the new order.
    pub id: String,
    /// Order title.
    pub title: String,
    /// Academic discipline.
    #[serde(default)]
    pub discipline: Option<String>,
    /// Paper type (essay, thesis, report, ...).
    #[serde(default)]
    pub paper_type: Option<String>,
    /// Citation format (APA, MLA, ...).
    #[serde(default)]
    pub format: Option<String>,
    /// Page count; must be at least 1.
    pub pages: u32,
    /// Word count.
    #[serde(default)]
    pub words: Option<u32>,
    /// Cost per page in KES; platform default applies when absent.
    #[serde(default)]
    pub cpp: Option<f64>,
    /// Urgency level (`normal`, `urgent`, `very-urgent`); defaults to normal.
    #[serde(default)]
    pub urgency: Option<String>,
    /// Delivery deadline.
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
}

/// A file attached to an action dispatch.
///
/// `uploaded_by` is always taken from the dispatching actor, never from
/// the payload; `uploaded_at` defaults to dispatch time when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    /// Unique file identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// External storage URL, if already uploaded.
    #[serde(default)]
    pub url: Option<String>,
    /// Upload timestamp override.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub uploaded_at: Option<OffsetDateTime>,
}

/// A lifecycle action dispatch against one order.
///
/// `action` carries the wire string (e.g. `"approve_bid"`); the remaining
/// fields are consumed per action and ignored otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// The action wire string.
    pub action: String,
    /// The dispatching actor's identifier.
    pub actor_id: String,
    /// The dispatching actor's role (`writer`, `admin`, `system`).
    pub actor_role: String,
    /// Trace identifier for the triggering request or event.
    #[serde(default)]
    pub cause_id: Option<String>,
    /// Why the action was dispatched.
    #[serde(default)]
    pub cause_description: Option<String>,
    /// Target bid for `approve_bid` / `decline_bid`.
    #[serde(default)]
    pub bid_id: Option<String>,
    /// New bid identifier for `bid`.
    #[serde(default)]
    pub new_bid_id: Option<String>,
    /// Writer for `bid` (the bidder) or `assign` (the assignee).
    #[serde(default)]
    pub writer_id: Option<String>,
    /// The writer's display name.
    #[serde(default)]
    pub writer_name: Option<String>,
    /// Optional pitch for `bid`.
    #[serde(default)]
    pub notes: Option<String>,
    /// Admin explanation for `request_revision`.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Optional revision category.
    #[serde(default)]
    pub revision_type: Option<String>,
    /// Optional revision priority.
    #[serde(default)]
    pub revision_priority: Option<String>,
    /// Specific areas of the work flagged for rework.
    #[serde(default)]
    pub revision_areas: Vec<String>,
    /// Files for `upload_files`.
    #[serde(default)]
    pub files: Vec<FilePayload>,
    /// Identifier for `request_revision`'s appended record.
    #[serde(default)]
    pub revision_request_id: Option<String>,
    /// Target file for `remove_file`.
    #[serde(default)]
    pub file_id: Option<String>,
}

/// Filters for the order listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    /// Keep only orders in this status.
    #[serde(default)]
    pub status: Option<String>,
    /// Keep only orders assigned to this writer.
    #[serde(default)]
    pub writer_id: Option<String>,
}

/// Request to create a new POD order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePodRequest {
    /// Stable unique identifier for the new POD order.
    pub id: String,
    /// Description of the deliverable.
    pub title: String,
    /// Name of the receiving client.
    pub client_name: String,
    /// Delivery destination.
    pub delivery_address: String,
    /// Amount payable on delivery, in KES.
    pub amount_kes: f64,
}

/// A lifecycle action dispatch against one POD order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodActionRequest {
    /// One of `transition`, `record_delivery`, `record_payment`.
    pub action: String,
    /// Target status for `transition`.
    #[serde(default)]
    pub to_status: Option<String>,
    /// Handler to record when transitioning to `Assigned`.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

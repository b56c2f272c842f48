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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use inkdesk_api::{
    ActionRequest, ApiError, CreateOrderRequest, CreatePodRequest, DEFAULT_AVERAGE_RATING,
    OrderQuery, OrderService, PodActionRequest,
};
use inkdesk_domain::{Order, PodOrder, RankedBid, WriterPerformance};
use inkdesk_store::{
    MemoryOrderStore, MemoryPodStore, Notifier, NullNotifier, SystemClock, TracingNotifier,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// InkDesk Server - HTTP server for the InkDesk order engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Average writer rating injected into bid ranking (0-5)
    #[arg(long, default_value_t = DEFAULT_AVERAGE_RATING)]
    average_rating: f64,

    /// Disable event notification logging
    #[arg(long, default_value_t = false)]
    quiet_events: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The order service wiring the engine to storage.
    service: Arc<OrderService>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidTransition { .. }
            | ApiError::GuardBlocked { .. }
            | ApiError::RuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/api/orders` endpoint.
///
/// Creates a new draft order with its price fixed at creation.
async fn handle_create_order(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<Order>, HttpError> {
    info!(order_id = %req.id, pages = req.pages, "Handling create_order request");
    let order: Order = state.service.create_order(req)?;
    Ok(Json(order))
}

/// Handler for GET `/api/orders` endpoint.
///
/// Lists orders, optionally filtered by status and writer.
async fn handle_list_orders(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<Order>>, HttpError> {
    let orders: Vec<Order> = state.service.list_orders(&query)?;
    Ok(Json(orders))
}

/// Handler for GET `/api/orders/{order_id}` endpoint.
async fn handle_get_order(
    AxumState(state): AxumState<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, HttpError> {
    let order: Order = state.service.get_order(&order_id)?;
    Ok(Json(order))
}

/// Handler for POST `/api/orders/{order_id}/actions` endpoint.
///
/// Dispatches one lifecycle action against one order.
async fn handle_order_action(
    AxumState(state): AxumState<AppState>,
    Path(order_id): Path<String>,
    Json(req): Json<ActionRequest>,
) -> Result<Json<Order>, HttpError> {
    info!(
        order_id = %order_id,
        action = %req.action,
        actor_id = %req.actor_id,
        role = %req.actor_role,
        "Handling order action request"
    );
    let order: Order = state.service.perform_action(&order_id, req)?;
    Ok(Json(order))
}

/// Handler for GET `/api/orders/{order_id}/bids/ranked` endpoint.
///
/// Ranks the order's pending bids by writer merit.
async fn handle_ranked_bids(
    AxumState(state): AxumState<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<RankedBid>>, HttpError> {
    let ranked: Vec<RankedBid> = state.service.ranked_bids(&order_id)?;
    Ok(Json(ranked))
}

/// Handler for GET `/api/writers/{writer_id}/performance` endpoint.
async fn handle_writer_performance(
    AxumState(state): AxumState<AppState>,
    Path(writer_id): Path<String>,
) -> Result<Json<WriterPerformance>, HttpError> {
    let perf: WriterPerformance = state.service.writer_performance(&writer_id)?;
    Ok(Json(perf))
}

/// Handler for POST `/api/pod_orders` endpoint.
async fn handle_create_pod(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreatePodRequest>,
) -> Result<Json<PodOrder>, HttpError> {
    info!(pod_id = %req.id, "Handling create_pod request");
    let pod: PodOrder = state.service.create_pod(req)?;
    Ok(Json(pod))
}

/// Handler for GET `/api/pod_orders` endpoint.
async fn handle_list_pods(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<PodOrder>>, HttpError> {
    let pods: Vec<PodOrder> = state.service.list_pods()?;
    Ok(Json(pods))
}

/// Handler for GET `/api/pod_orders/{pod_id}` endpoint.
async fn handle_get_pod(
    AxumState(state): AxumState<AppState>,
    Path(pod_id): Path<String>,
) -> Result<Json<PodOrder>, HttpError> {
    let pod: PodOrder = state.service.get_pod(&pod_id)?;
    Ok(Json(pod))
}

/// Handler for POST `/api/pod_orders/{pod_id}/actions` endpoint.
async fn handle_pod_action(
    AxumState(state): AxumState<AppState>,
    Path(pod_id): Path<String>,
    Json(req): Json<PodActionRequest>,
) -> Result<Json<PodOrder>, HttpError> {
    info!(pod_id = %pod_id, action = %req.action, "Handling pod action request");
    let pod: PodOrder = state.service.perform_pod_action(&pod_id, req)?;
    Ok(Json(pod))
}

/// Builds the application router with all endpoints.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", post(handle_create_order))
        .route("/api/orders", get(handle_list_orders))
        .route("/api/orders/{order_id}", get(handle_get_order))
        .route("/api/orders/{order_id}/actions", post(handle_order_action))
        .route("/api/orders/{order_id}/bids/ranked", get(handle_ranked_bids))
        .route(
            "/api/writers/{writer_id}/performance",
            get(handle_writer_performance),
        )
        .route("/api/pod_orders", post(handle_create_pod))
        .route("/api/pod_orders", get(handle_list_pods))
        .route("/api/pod_orders/{pod_id}", get(handle_get_pod))
        .route("/api/pod_orders/{pod_id}/actions", post(handle_pod_action))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing InkDesk Server");

    let notifier: Arc<dyn Notifier> = if args.quiet_events {
        Arc::new(NullNotifier)
    } else {
        Arc::new(TracingNotifier)
    };
    let service: OrderService = OrderService::new(
        Arc::new(MemoryOrderStore::new()),
        Arc::new(MemoryPodStore::new()),
        Arc::new(SystemClock),
        notifier,
    )
    .with_average_rating(args.average_rating)?;

    let state: AppState = AppState {
        service: Arc::new(service),
    };

    // Build router
    let app: Router = build_router(state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

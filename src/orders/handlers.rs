//! HTTP handlers for order operations
//!
//! Every handler forwards parsed input straight to the injected
//! [`OrderStore`] and sends the store's result back as JSON. Only the
//! filtered search has its own error body; any other store failure becomes an
//! `UNHANDLED_FAULT` 500.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{
    DeleteOutcome, InsertOutcome, Order, OrderDeskError, OrderFilter, OrderPatch, OrderStore,
    PageRequest, RequestError, TotalOrders, UpdateOutcome,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

/// Query string of the unfinished `get-order` endpoint
#[derive(Debug, Deserialize)]
pub struct SearchInputParams {
    #[serde(rename = "searchInput")]
    pub search_input: Option<String>,
}

/// Request body for dispatching an order
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    #[serde(rename = "selectedOrderId")]
    pub selected_order_id: Value,
}

/// Request body for deleting orders
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "orderID")]
    pub order_id: Value,
}

/// Create an order
///
/// POST /api/v1/create-new-order
///
/// The body is stored verbatim. Anything but a JSON object is rejected.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertOutcome>, OrderDeskError> {
    let Value::Object(order) = body else {
        return Err(RequestError::InvalidBody {
            message: "an order must be a JSON object".to_string(),
        }
        .into());
    };

    let outcome = state
        .store
        .create(order)
        .await
        .map_err(|e| OrderDeskError::unhandled("create order", e))?;

    Ok(Json(outcome))
}

/// List every order
///
/// GET /api/v1/get-all-order
pub async fn list_all_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, OrderDeskError> {
    let orders = state
        .store
        .list_all()
        .await
        .map_err(|e| OrderDeskError::unhandled("list orders", e))?;

    Ok(Json(orders))
}

/// Unfinished free-text search
///
/// GET /api/v1/get-order?searchInput=...
///
/// Runs no query. Answers 204 with an empty body; use `/api/v1/orders` for
/// searching.
pub async fn get_order(Query(params): Query<SearchInputParams>) -> StatusCode {
    tracing::debug!(search_input = ?params.search_input, "get-order performs no search");
    StatusCode::NO_CONTENT
}

/// Mark an order as dispatched
///
/// PUT /api/v1/status
///
/// Always writes `status: "dispatched"`; the target status cannot be chosen.
pub async fn update_status(
    State(state): State<AppState>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<UpdateOutcome>, OrderDeskError> {
    tracing::info!(order_id = %request.selected_order_id, "Dispatching order");

    let outcome = state
        .store
        .update_status(&request.selected_order_id)
        .await
        .map_err(|e| OrderDeskError::unhandled("update order status", e))?;

    Ok(Json(outcome))
}

/// Update `name`, `email` and `shipping` of an order
///
/// PATCH /api/v1/update-order
///
/// Only truthy fields are copied; an unknown `orderId` yields `matchedCount: 0`.
pub async fn update_order(
    State(state): State<AppState>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<UpdateOutcome>, OrderDeskError> {
    let outcome = state
        .store
        .update_partial(&patch)
        .await
        .map_err(|e| OrderDeskError::unhandled("update order", e))?;

    Ok(Json(outcome))
}

/// Search orders
///
/// GET /api/v1/orders?query=&orderType=&status=
pub async fn search_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<Json<Vec<Order>>, OrderDeskError> {
    tracing::debug!(?filter, "Searching orders");

    let orders = state
        .store
        .search(&filter)
        .await
        .map_err(OrderDeskError::search)?;

    Ok(Json(orders))
}

/// Count orders
///
/// GET /api/v1/total-order
pub async fn total_orders(
    State(state): State<AppState>,
) -> Result<Json<TotalOrders>, OrderDeskError> {
    let total_order = state
        .store
        .count()
        .await
        .map_err(|e| OrderDeskError::unhandled("count orders", e))?;

    Ok(Json(TotalOrders { total_order }))
}

/// List one page of orders
///
/// GET /api/v1/order?page=&size=
pub async fn list_order_page(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<Order>>, OrderDeskError> {
    page.validate()?;

    let orders = state
        .store
        .list_page(page)
        .await
        .map_err(|e| OrderDeskError::unhandled("list order page", e))?;

    Ok(Json(orders))
}

/// Delete every order with the given `orderID`
///
/// DELETE /api/v1/delete-order
pub async fn delete_order(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeleteOutcome>, OrderDeskError> {
    tracing::info!(order_id = %request.order_id, "Deleting orders");

    let outcome = state
        .store
        .delete_many(&request.order_id)
        .await
        .map_err(|e| OrderDeskError::unhandled("delete orders", e))?;

    Ok(Json(outcome))
}

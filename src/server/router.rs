//! Router builder for order routes

use crate::orders::handlers::{
    AppState, create_order, delete_order, get_order, list_all_orders, list_order_page,
    search_orders, total_orders, update_order, update_status,
};
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

/// Build the order routes
///
/// - POST   /api/v1/create-new-order - Create an order
/// - GET    /api/v1/get-all-order    - List every order
/// - GET    /api/v1/get-order        - No-op, answers 204
/// - PUT    /api/v1/status           - Mark an order dispatched
/// - PATCH  /api/v1/update-order     - Update name/email/shipping
/// - GET    /api/v1/orders           - Search orders
/// - GET    /api/v1/total-order      - Count orders
/// - GET    /api/v1/order            - List one page
/// - DELETE /api/v1/delete-order     - Delete by orderID
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/create-new-order", post(create_order))
        .route("/api/v1/get-all-order", get(list_all_orders))
        .route("/api/v1/get-order", get(get_order))
        .route("/api/v1/status", put(update_status))
        .route("/api/v1/update-order", patch(update_order))
        .route("/api/v1/orders", get(search_orders))
        .route("/api/v1/total-order", get(total_orders))
        .route("/api/v1/order", get(list_order_page))
        .route("/api/v1/delete-order", delete(delete_order))
        .with_state(state)
}

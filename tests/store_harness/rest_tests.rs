//! REST integration test macro for order stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! an `OrderStore` through full round-trips:
//! JSON → HTTP request → handler → OrderStore → HTTP response → JSON.
//!
//! # Generated Tests
//!
//! - `test_rest_liveness`: GET / answers plaintext
//! - `test_rest_create_and_list`: POST then GET get-all-order
//! - `test_rest_create_rejects_non_object`: array body → 400
//! - `test_rest_get_order_is_noop`: 204 with empty body
//! - `test_rest_total_and_pages`: total-order and page/size slices
//! - `test_rest_zero_page_size_rejected`: size=0 → 400
//! - `test_rest_update_order_patch`: PATCH copies truthy fields only
//! - `test_rest_order_lifecycle`: create, search, dispatch, delete
//! - `test_rest_delete_removes_duplicates`: many-deletion by orderID
//! - `test_rest_cors_is_open`: any origin allowed

/// Generate a REST integration test suite for an order store.
///
/// `$store_factory` must produce an `impl OrderStore + 'static`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::{HeaderName, HeaderValue, StatusCode};
            use axum_test::TestServer;
            use order_desk::core::OrderStore;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let store = $store_factory;
                let store: Arc<dyn OrderStore> = Arc::new(store);
                TestServer::try_new(store_harness::build_test_router(store)).unwrap()
            }

            async fn all_orders(server: &TestServer) -> Vec<Value> {
                let response = server.get("/api/v1/get-all-order").await;
                response.assert_status_ok();
                response.json::<Vec<Value>>()
            }

            #[tokio::test]
            async fn test_rest_liveness() {
                let server = make_server().await;

                let response = server.get("/").await;
                response.assert_status_ok();
                assert_eq!(response.text(), order_desk::server::rest::LIVENESS_MESSAGE);

                let health: Value = server.get("/health").await.json();
                assert_eq!(health["status"], "ok");
            }

            #[tokio::test]
            async fn test_rest_create_and_list() {
                let server = make_server().await;

                let response = server
                    .post("/api/v1/create-new-order")
                    .json(&json!({
                        "orderID": "A1",
                        "name": "Jo",
                        "status": "pending",
                        "notes": {"gift": true}
                    }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["acknowledged"], true);
                let inserted_id = body["insertedId"].clone();
                assert!(!inserted_id.is_null());

                let all = all_orders(&server).await;
                assert_eq!(all.len(), 1);
                assert_eq!(all[0]["_id"], inserted_id);
                assert_eq!(all[0]["orderID"], "A1");
                assert_eq!(all[0]["name"], "Jo");
                assert_eq!(all[0]["notes"], json!({"gift": true}));
            }

            #[tokio::test]
            async fn test_rest_create_rejects_non_object() {
                let server = make_server().await;

                let response = server
                    .post("/api/v1/create-new-order")
                    .json(&json!(["not", "an", "order"]))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
                assert!(all_orders(&server).await.is_empty());
            }

            #[tokio::test]
            async fn test_rest_get_order_is_noop() {
                let server = make_server().await;
                server
                    .post("/api/v1/create-new-order")
                    .json(&json!({"orderID": "A1", "name": "Jo"}))
                    .await;

                let response = server
                    .get("/api/v1/get-order")
                    .add_query_param("searchInput", "Jo")
                    .await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());
            }

            #[tokio::test]
            async fn test_rest_total_and_pages() {
                let server = make_server().await;
                for i in 0..5 {
                    server
                        .post("/api/v1/create-new-order")
                        .json(&json!({"orderID": format!("P{}", i)}))
                        .await
                        .assert_status_ok();
                }

                let total: Value = server.get("/api/v1/total-order").await.json();
                assert_eq!(total, json!({"totalOrder": 5}));

                let mut seen = Vec::new();
                for page in 0..3 {
                    let response = server
                        .get("/api/v1/order")
                        .add_query_param("page", page)
                        .add_query_param("size", 2)
                        .await;
                    response.assert_status_ok();
                    for record in response.json::<Vec<Value>>() {
                        seen.push(record["orderID"].as_str().unwrap().to_string());
                    }
                }
                seen.sort();
                assert_eq!(seen, vec!["P0", "P1", "P2", "P3", "P4"]);
            }

            #[tokio::test]
            async fn test_rest_zero_page_size_rejected() {
                let server = make_server().await;

                let response = server
                    .get("/api/v1/order")
                    .add_query_param("page", 0)
                    .add_query_param("size", 0)
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_PAGE");
            }

            #[tokio::test]
            async fn test_rest_update_order_patch() {
                let server = make_server().await;
                server
                    .post("/api/v1/create-new-order")
                    .json(&json!({
                        "orderID": "A1",
                        "name": "Jo",
                        "email": "jo@example.com",
                        "shipping": "Dock 4"
                    }))
                    .await;

                let response = server
                    .patch("/api/v1/update-order")
                    .json(&json!({
                        "orderId": "A1",
                        "name": "",
                        "shipping": "Dock 9",
                        "status": "ignored"
                    }))
                    .await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["matchedCount"], 1);
                assert_eq!(body["modifiedCount"], 1);

                let all = all_orders(&server).await;
                assert_eq!(all[0]["name"], "Jo");
                assert_eq!(all[0]["shipping"], "Dock 9");
                assert!(all[0].get("status").is_none());

                let missing: Value = server
                    .patch("/api/v1/update-order")
                    .json(&json!({"orderId": "nope", "name": "X"}))
                    .await
                    .json();
                assert_eq!(missing["matchedCount"], 0);
            }

            #[tokio::test]
            async fn test_rest_order_lifecycle() {
                let server = make_server().await;

                server
                    .post("/api/v1/create-new-order")
                    .json(&json!({"orderID": "A1", "name": "Jo", "status": "pending"}))
                    .await
                    .assert_status_ok();

                let pending: Vec<Value> = server
                    .get("/api/v1/orders")
                    .add_query_param("status", "pending")
                    .await
                    .json();
                assert_eq!(pending.len(), 1);
                assert_eq!(pending[0]["orderID"], "A1");

                let dispatch: Value = server
                    .put("/api/v1/status")
                    .json(&json!({"selectedOrderId": "A1"}))
                    .await
                    .json();
                assert_eq!(dispatch["matchedCount"], 1);

                let dispatched: Vec<Value> = server
                    .get("/api/v1/orders")
                    .add_query_param("status", "dispatched")
                    .await
                    .json();
                assert_eq!(dispatched.len(), 1);
                assert_eq!(dispatched[0]["orderID"], "A1");
                assert_eq!(dispatched[0]["status"], "dispatched");

                let deleted: Value = server
                    .delete("/api/v1/delete-order")
                    .json(&json!({"orderID": "A1"}))
                    .await
                    .json();
                assert_eq!(deleted["deletedCount"], 1);

                assert!(all_orders(&server).await.is_empty());
            }

            #[tokio::test]
            async fn test_rest_delete_removes_duplicates() {
                let server = make_server().await;
                for name in ["First", "Second"] {
                    server
                        .post("/api/v1/create-new-order")
                        .json(&json!({"orderID": 77, "name": name}))
                        .await;
                }

                let deleted: Value = server
                    .delete("/api/v1/delete-order")
                    .json(&json!({"orderID": 77}))
                    .await
                    .json();
                assert_eq!(deleted, json!({"acknowledged": true, "deletedCount": 2}));
            }

            #[tokio::test]
            async fn test_rest_cors_is_open() {
                let server = make_server().await;

                let response = server
                    .get("/api/v1/total-order")
                    .add_header(
                        HeaderName::from_static("origin"),
                        HeaderValue::from_static("https://shop.example.com"),
                    )
                    .await;
                response.assert_status_ok();

                let allow = response
                    .headers()
                    .get("access-control-allow-origin")
                    .expect("CORS header should be present");
                assert_eq!(allow, "*");
            }
        }
    };
}

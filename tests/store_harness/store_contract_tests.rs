//! Macro-generated test suite for `OrderStore` contract validation.
//!
//! The `order_store_tests!` macro generates a test module that validates any
//! `OrderStore` implementation: ingestion, listing, paging, search, updates
//! matched by `orderID` and many-deletion.
//!
//! # Generated Tests
//!
//! ## Ingestion & listing
//! - `test_create_then_list_keeps_fields`: every submitted field survives
//! - `test_count_grows_with_inserts`: count = previous + N
//! - `test_pages_are_disjoint`: page 0 and 1 (size 2) cover the first 4
//!
//! ## Search
//! - `test_search_order_type_is_case_sensitive_on_stored_value`
//! - `test_search_query_matches_any_text_field`
//! - `test_search_combines_conditions`
//!
//! ## Mutations
//! - `test_update_status_writes_dispatched`
//! - `test_update_unknown_order_matches_nothing`
//! - `test_partial_update_ignores_empty_strings`
//! - `test_delete_removes_every_match`
//! - `test_ping`

/// Generate a full `OrderStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `OrderStore`. It is re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! order_store_tests {
    ($factory:expr) => {
        mod order_store_contract_tests {
            use super::*;
            use order_desk::core::{OrderFilter, OrderPatch, OrderStore, PageRequest};
            use serde_json::json;

            fn filter(
                query: Option<&str>,
                order_type: Option<&str>,
                status: Option<&str>,
            ) -> OrderFilter {
                OrderFilter {
                    query: query.map(String::from),
                    order_type: order_type.map(String::from),
                    status: status.map(String::from),
                }
            }

            // ==================================================================
            // Ingestion & listing
            // ==================================================================

            #[tokio::test]
            async fn test_create_then_list_keeps_fields() {
                let store = $factory;
                let submitted = sample_order("A1", "Jo");

                let outcome = store.create(submitted.clone()).await.unwrap();
                assert!(outcome.acknowledged);
                assert!(!outcome.inserted_id.is_null());

                let all = store.list_all().await.unwrap();
                assert_eq!(all.len(), 1);
                for (field, value) in &submitted {
                    assert_eq!(all[0].get(field), Some(value), "field {field} changed");
                }
                assert_eq!(all[0]["_id"], outcome.inserted_id);
            }

            #[tokio::test]
            async fn test_count_grows_with_inserts() {
                let store = $factory;
                seed_orders(&store, 2).await;
                let before = store.count().await.unwrap();

                seed_orders(&store, 3).await;
                assert_eq!(store.count().await.unwrap(), before + 3);
            }

            #[tokio::test]
            async fn test_pages_are_disjoint() {
                let store = $factory;
                seed_orders(&store, 5).await;

                let first = store.list_page(PageRequest::new(0, 2)).await.unwrap();
                let second = store.list_page(PageRequest::new(1, 2)).await.unwrap();
                assert_eq!(first.len(), 2);
                assert_eq!(second.len(), 2);

                let mut ids: Vec<String> = field_values(&first, "orderID")
                    .into_iter()
                    .chain(field_values(&second, "orderID"))
                    .map(|v| v.as_str().unwrap().to_string())
                    .collect();
                ids.sort();
                assert_eq!(ids, vec!["SEED-0", "SEED-1", "SEED-2", "SEED-3"]);

                let last = store.list_page(PageRequest::new(2, 2)).await.unwrap();
                assert_eq!(field_values(&last, "orderID"), vec![&json!("SEED-4")]);
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_order_type_is_case_sensitive_on_stored_value() {
                let store = $factory;
                store
                    .create(order(json!({"orderID": "L", "orderType": "retail"})))
                    .await
                    .unwrap();
                store
                    .create(order(json!({"orderID": "U", "orderType": "Retail"})))
                    .await
                    .unwrap();

                let found = store.search(&filter(None, Some("RETAIL"), None)).await.unwrap();
                assert_eq!(field_values(&found, "orderID"), vec![&json!("L")]);
            }

            #[tokio::test]
            async fn test_search_query_matches_any_text_field() {
                let store = $factory;
                store
                    .create(order(json!({"orderID": "1", "name": "Maria", "country": "Chile"})))
                    .await
                    .unwrap();
                store
                    .create(order(json!({"orderID": "2", "name": "Ana", "source": "CHILEAN-shop"})))
                    .await
                    .unwrap();
                store
                    .create(order(json!({"orderID": "3", "name": "Ben", "status": "chile"})))
                    .await
                    .unwrap();

                let found = store.search(&filter(Some("chile"), None, None)).await.unwrap();
                let mut ids = field_values(&found, "orderID");
                ids.sort_by_key(|v| v.as_str().map(String::from));
                assert_eq!(ids, vec![&json!("1"), &json!("2")]);
            }

            #[tokio::test]
            async fn test_search_combines_conditions() {
                let store = $factory;
                store.create(sample_order("A1", "Jo")).await.unwrap();
                let mut dispatched = sample_order("A2", "Jo");
                dispatched.insert("status".into(), json!("dispatched"));
                store.create(dispatched).await.unwrap();

                let found = store
                    .search(&filter(Some("jo"), Some("retail"), Some("Pending")))
                    .await
                    .unwrap();
                assert_eq!(field_values(&found, "orderID"), vec![&json!("A1")]);

                let everything = store.search(&OrderFilter::default()).await.unwrap();
                assert_eq!(everything.len(), 2);
            }

            // ==================================================================
            // Mutations
            // ==================================================================

            #[tokio::test]
            async fn test_update_status_writes_dispatched() {
                let store = $factory;
                store.create(sample_order("A1", "Jo")).await.unwrap();

                let outcome = store.update_status(&json!("A1")).await.unwrap();
                assert_eq!(outcome.matched_count, 1);
                assert_eq!(outcome.modified_count, 1);

                let all = store.list_all().await.unwrap();
                assert_eq!(all[0]["status"], "dispatched");
            }

            #[tokio::test]
            async fn test_update_unknown_order_matches_nothing() {
                let store = $factory;
                store.create(sample_order("A1", "Jo")).await.unwrap();

                let outcome = store.update_status(&json!("missing")).await.unwrap();
                assert_eq!(outcome.matched_count, 0);
                assert_eq!(outcome.modified_count, 0);
            }

            #[tokio::test]
            async fn test_partial_update_ignores_empty_strings() {
                let store = $factory;
                store.create(sample_order("A1", "Jo")).await.unwrap();

                let patch: OrderPatch = serde_json::from_value(json!({
                    "orderId": "A1",
                    "name": "",
                    "email": "new@example.com"
                }))
                .unwrap();
                let outcome = store.update_partial(&patch).await.unwrap();
                assert_eq!(outcome.matched_count, 1);

                let all = store.list_all().await.unwrap();
                assert_eq!(all[0]["name"], "Jo");
                assert_eq!(all[0]["email"], "new@example.com");
                assert_eq!(all[0]["shipping"], "12 Harbour Road");
            }

            #[tokio::test]
            async fn test_delete_removes_every_match() {
                let store = $factory;
                store.create(sample_order("X", "First")).await.unwrap();
                store.create(sample_order("X", "Second")).await.unwrap();
                store.create(sample_order("Y", "Other")).await.unwrap();

                let outcome = store.delete_many(&json!("X")).await.unwrap();
                assert_eq!(outcome.deleted_count, 2);

                let remaining = store.list_all().await.unwrap();
                assert_eq!(field_values(&remaining, "orderID"), vec![&json!("Y")]);
            }

            #[tokio::test]
            async fn test_ping() {
                let store = $factory;
                store.ping().await.unwrap();
            }
        }
    };
}

//! Store trait for order operations

use crate::core::filter::OrderFilter;
use crate::core::order::{DeleteOutcome, InsertOutcome, Order, UpdateOutcome};
use crate::core::query::PageRequest;
use crate::core::update::{OrderPatch, UpdateSet};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Service trait for the order collection
///
/// Implementations talk to a single collection. The service is agnostic to
/// the underlying storage mechanism; HTTP handlers receive it as
/// `Arc<dyn OrderStore>`.
///
/// Updates and deletes are matched by the business identifier `orderID`,
/// never by the storage key.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert one order exactly as given
    async fn create(&self, order: Order) -> Result<InsertOutcome>;

    /// List every order, unpaged
    async fn list_all(&self) -> Result<Vec<Order>>;

    /// Total number of orders (may be an estimate)
    async fn count(&self) -> Result<u64>;

    /// List one page of orders in a stable storage order
    ///
    /// Consecutive pages are disjoint as long as no writes happen in between.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Order>>;

    /// List orders matching every condition of `filter`
    async fn search(&self, filter: &OrderFilter) -> Result<Vec<Order>>;

    /// Apply `set` to the first order whose `orderID` equals `order_id`
    ///
    /// Matching nothing is not an error: the outcome reports `matchedCount: 0`.
    async fn update_one(&self, order_id: &Value, set: &UpdateSet) -> Result<UpdateOutcome>;

    /// Delete every order whose `orderID` equals `order_id`
    async fn delete_many(&self, order_id: &Value) -> Result<DeleteOutcome>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Mark an order as dispatched
    async fn update_status(&self, order_id: &Value) -> Result<UpdateOutcome> {
        self.update_one(order_id, &UpdateSet::dispatched()).await
    }

    /// Apply the truthy fields of a patch
    async fn update_partial(&self, patch: &OrderPatch) -> Result<UpdateOutcome> {
        self.update_one(&patch.order_id, &UpdateSet::from(patch)).await
    }
}

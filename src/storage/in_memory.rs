//! In-memory implementation of OrderStore for testing and development

use crate::core::order::{self, DeleteOutcome, InsertOutcome, Order, UpdateOutcome};
use crate::core::{OrderFilter, OrderStore, PageRequest, UpdateSet};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory order store
///
/// Records are kept in insertion order, which is also the page order.
/// Records without an `_id` get a UUID v4 string. Uses RwLock for
/// thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new, empty in-memory order store
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_order_id(record: &Order, order_id: &Value) -> bool {
    let stored = record.get(order::ORDER_ID).unwrap_or(&Value::Null);
    order::order_id_matches(stored, order_id)
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, mut record: Order) -> Result<InsertOutcome> {
        let id = record
            .entry(order::STORAGE_ID)
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()))
            .clone();

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if orders.iter().any(|o| o.get(order::STORAGE_ID) == Some(&id)) {
            return Err(anyhow!("Duplicate key: _id {} already exists", id));
        }
        orders.push(record);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.clone())
    }

    async fn count(&self) -> Result<u64> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.len() as u64)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.size).unwrap_or(usize::MAX);

        Ok(orders.iter().skip(skip).take(take).cloned().collect())
    }

    async fn search(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let compiled = filter.compile()?;

        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders
            .iter()
            .filter(|o| compiled.matches(o))
            .cloned()
            .collect())
    }

    async fn update_one(&self, order_id: &Value, set: &UpdateSet) -> Result<UpdateOutcome> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match orders.iter_mut().find(|o| matches_order_id(o, order_id)) {
            Some(record) => {
                let modified = set.apply_to(record);
                Ok(UpdateOutcome::new(1, u64::from(modified)))
            }
            None => Ok(UpdateOutcome::new(0, 0)),
        }
    }

    async fn delete_many(&self, order_id: &Value) -> Result<DeleteOutcome> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let before = orders.len();
        orders.retain(|o| !matches_order_id(o, order_id));

        Ok(DeleteOutcome::new((before - orders.len()) as u64))
    }

    async fn ping(&self) -> Result<()> {
        let _orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(())
    }
}

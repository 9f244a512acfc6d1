//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoOrderStore`, an [`OrderStore`] over a single collection.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag, which is
//! enabled by default.
//!
//! # Serialization strategy
//!
//! Orders travel as `serde_json` objects and are converted to BSON documents
//! on the way in. On the way out, documents are rendered as relaxed extended
//! JSON, except that an `ObjectId` storage key is rendered as its hex string
//! so clients see `"_id": "65a1..."` rather than `{"$oid": ...}`.

use crate::config::ServiceConfig;
use crate::core::order::{self, DeleteOutcome, InsertOutcome, Order, UpdateOutcome};
use crate::core::{OrderFilter, OrderStore, PageRequest, UpdateSet};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a JSON object into a BSON Document.
fn json_to_document(json: Value) -> Result<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    match bson_val {
        Bson::Document(d) => Ok(d),
        _ => Err(anyhow!("Expected BSON document, got non-object")),
    }
}

/// Convert a single JSON value into BSON, for use inside filters and `$set`.
fn json_to_bson(value: &Value) -> Result<Bson> {
    mongodb::bson::to_bson(value).map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))
}

/// Render a BSON value as JSON, with ObjectIds as hex strings.
fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert a BSON Document back into an order.
fn document_to_order(mut doc: Document) -> Order {
    let id = doc.remove(order::STORAGE_ID);

    let mut record = match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Order::new(),
    };

    if let Some(id) = id {
        record.insert(order::STORAGE_ID.to_string(), bson_to_json(id));
    }
    record
}

/// Build the `find` filter for a search.
fn filter_document(filter: &OrderFilter) -> Document {
    let mut query = Document::new();

    if let Some(pattern) = filter.query_pattern() {
        let alternatives: Vec<Document> = order::SEARCHABLE_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        query.insert("$or", alternatives);
    }
    if let Some(order_type) = filter.order_type_value() {
        query.insert(order::ORDER_TYPE, order_type);
    }
    if let Some(status) = filter.status_value() {
        query.insert(order::STATUS, status);
    }

    query
}

/// Build the `$set` update document.
fn set_document(set: &UpdateSet) -> Result<Document> {
    let mut fields = Document::new();
    for (field, value) in set.iter() {
        fields.insert(field, json_to_bson(value)?);
    }
    Ok(doc! { "$set": fields })
}

fn order_id_filter(order_id: &Value) -> Result<Document> {
    let mut filter = Document::new();
    filter.insert(order::ORDER_ID, json_to_bson(order_id)?);
    Ok(filter)
}

// ---------------------------------------------------------------------------
// MongoOrderStore
// ---------------------------------------------------------------------------

/// Order store backed by a MongoDB collection.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use order_desk::storage::MongoOrderStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoOrderStore::new(client, "shop", "order");
/// let outcome = store.create(my_order).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoOrderStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoOrderStore {
    /// Create a store over `database.collection` using an existing client
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self { client, collection }
    }

    /// Connect using the service configuration.
    ///
    /// The client pins Stable API v1 in strict mode with deprecation errors.
    /// No network round-trip happens here; call [`OrderStore::ping`] to check
    /// reachability.
    pub async fn connect(config: &ServiceConfig) -> Result<Self> {
        let uri = config.connection_uri()?;

        let mut options = ClientOptions::parse(&uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        Ok(Self::new(client, &config.database, &config.collection))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> Database {
        self.client.database(self.collection.namespace().db.as_str())
    }

    /// Get a reference to the underlying collection.
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    async fn collect(&self, cursor: mongodb::Cursor<Document>, what: &str) -> Result<Vec<Order>> {
        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect {}: {}", what, e))?;

        Ok(docs.into_iter().map(document_to_order).collect())
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    async fn create(&self, order: Order) -> Result<InsertOutcome> {
        let doc = json_to_document(Value::Object(order))?;

        let result = self
            .collection
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create order: {}", e))?;

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        })
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| anyhow!("Failed to list orders: {}", e))?;

        self.collect(cursor, "orders").await
    }

    /// Uses collection metadata, so the figure is an estimate.
    async fn count(&self) -> Result<u64> {
        self.collection
            .estimated_document_count()
            .await
            .map_err(|e| anyhow!("Failed to count orders: {}", e))
    }

    /// Sorted by `_id` so that pages do not overlap.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Order>> {
        let limit = i64::try_from(page.size).unwrap_or(i64::MAX);

        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(limit)
            .await
            .map_err(|e| anyhow!("Failed to list order page: {}", e))?;

        self.collect(cursor, "order page").await
    }

    async fn search(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let query = filter_document(filter);
        tracing::debug!(filter = %query, "Searching orders");

        let cursor = self
            .collection
            .find(query)
            .await
            .map_err(|e| anyhow!("Failed to search orders: {}", e))?;

        self.collect(cursor, "search results").await
    }

    async fn update_one(&self, order_id: &Value, set: &UpdateSet) -> Result<UpdateOutcome> {
        let result = self
            .collection
            .update_one(order_id_filter(order_id)?, set_document(set)?)
            .await
            .map_err(|e| anyhow!("Failed to update order: {}", e))?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id.map(bson_to_json).unwrap_or(Value::Null),
        })
    }

    async fn delete_many(&self, order_id: &Value) -> Result<DeleteOutcome> {
        let result = self
            .collection
            .delete_many(order_id_filter(order_id)?)
            .await
            .map_err(|e| anyhow!("Failed to delete orders: {}", e))?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| anyhow!("Failed to ping MongoDB: {}", e))?;

        Ok(())
    }
}

//! Order records and the field names the service knows about
//!
//! Orders have no enforced schema. A record is a JSON object that keeps every
//! field the caller sent; only the handful of names below carry meaning for
//! filtering, updating and deleting.

use serde::Serialize;
use serde_json::{Map, Value};

/// A stored order: an arbitrary JSON object.
pub type Order = Map<String, Value>;

/// Business identifier used as the match key for updates and deletes
pub const ORDER_ID: &str = "orderID";

/// Storage-layer primary key, assigned on insert
pub const STORAGE_ID: &str = "_id";

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const SHIPPING: &str = "shipping";
pub const COUNTRY: &str = "country";
pub const SOURCE: &str = "source";
pub const ORDER_TYPE: &str = "orderType";
pub const STATUS: &str = "status";

/// Fields matched by the free-text `query` search parameter.
pub const SEARCHABLE_FIELDS: [&str; 6] = [NAME, EMAIL, COUNTRY, SHIPPING, SOURCE, ORDER_TYPE];

/// Status written by the dispatch endpoint. Not caller-selectable.
pub const DISPATCHED_STATUS: &str = "dispatched";

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy; everything
/// else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Equality as the document store applies it to `orderID`.
///
/// Numbers compare by value regardless of integer/float representation, so
/// `7` matches `7.0`. Everything else uses plain JSON equality.
pub fn order_id_matches(stored: &Value, wanted: &Value) -> bool {
    match (stored, wanted) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => stored == wanted,
    }
}

/// Result of inserting one order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

/// Result of an update matched by `orderID`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Value,
    pub upserted_count: u64,
}

impl UpdateOutcome {
    /// Outcome of a non-upserting update
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id: Value::Null,
            upserted_count: 0,
        }
    }
}

/// Result of deleting every order sharing an `orderID`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

//! Partial updates matched by `orderID`

use crate::core::order::{self, is_truthy};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `PATCH /api/v1/update-order`
///
/// Note the key is `orderId` here, while stored records use `orderID`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPatch {
    #[serde(rename = "orderId")]
    pub order_id: Value,

    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub email: Option<Value>,

    #[serde(default)]
    pub shipping: Option<Value>,
}

/// Ordered `(field, value)` pairs applied with `$set`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    fields: Vec<(String, Value)>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`, replacing an earlier assignment of the same field
    pub fn set(mut self, field: impl Into<String>, value: Value) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    /// Set `field` only when `value` is present and truthy
    pub fn set_if_truthy(self, field: &str, value: Option<&Value>) -> Self {
        match value {
            Some(v) if is_truthy(v) => self.set(field, v.clone()),
            _ => self,
        }
    }

    /// The fixed status change performed by `PUT /api/v1/status`
    pub fn dispatched() -> Self {
        Self::new().set(order::STATUS, Value::String(order::DISPATCHED_STATUS.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(f, v)| (f.as_str(), v))
    }

    /// Apply the assignments to a record in place.
    ///
    /// Returns whether any field actually changed.
    pub fn apply_to(&self, record: &mut Map<String, Value>) -> bool {
        let mut changed = false;
        for (field, value) in &self.fields {
            if record.get(field) != Some(value) {
                record.insert(field.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }
}

impl From<&OrderPatch> for UpdateSet {
    /// Copies `name`, `email` and `shipping` when truthy. Empty strings,
    /// `0`, `false` and `null` leave the stored value untouched.
    fn from(patch: &OrderPatch) -> Self {
        UpdateSet::new()
            .set_if_truthy(order::NAME, patch.name.as_ref())
            .set_if_truthy(order::EMAIL, patch.email.as_ref())
            .set_if_truthy(order::SHIPPING, patch.shipping.as_ref())
    }
}

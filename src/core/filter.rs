//! Search filter built from the optional `query`, `orderType` and `status`
//! parameters of `GET /api/v1/orders`

use crate::core::order::{self, Order};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_json::Value;

/// Optional search conditions, combined with AND
///
/// - `query`: case-insensitive substring over [`order::SEARCHABLE_FIELDS`] (OR)
/// - `orderType`: exact match on the lower-cased input
/// - `status`: exact match on the lower-cased input
///
/// Empty strings count as absent. Stored values are not normalized, so a
/// record saved with `"Retail"` never matches `orderType=retail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub query: Option<String>,

    #[serde(rename = "orderType")]
    pub order_type: Option<String>,

    pub status: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl OrderFilter {
    /// Free-text query, if any
    pub fn query_text(&self) -> Option<&str> {
        non_empty(&self.query)
    }

    /// The query as a literal regular-expression pattern
    ///
    /// Metacharacters are escaped, so `a.b` only matches the text `a.b`.
    pub fn query_pattern(&self) -> Option<String> {
        self.query_text().map(regex::escape)
    }

    /// Lower-cased `orderType` to compare against stored values
    pub fn order_type_value(&self) -> Option<String> {
        non_empty(&self.order_type).map(str::to_lowercase)
    }

    /// Lower-cased `status` to compare against stored values
    pub fn status_value(&self) -> Option<String> {
        non_empty(&self.status).map(str::to_lowercase)
    }

    /// True when no condition is set and every record matches
    pub fn is_empty(&self) -> bool {
        self.query_text().is_none()
            && self.order_type_value().is_none()
            && self.status_value().is_none()
    }

    /// Compile the filter for repeated in-process matching.
    pub fn compile(&self) -> Result<CompiledFilter, regex::Error> {
        let query = self
            .query_pattern()
            .map(|pattern| RegexBuilder::new(&pattern).case_insensitive(true).build())
            .transpose()?;

        Ok(CompiledFilter {
            query,
            order_type: self.order_type_value(),
            status: self.status_value(),
        })
    }
}

/// An [`OrderFilter`] ready to test records one by one
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    query: Option<Regex>,
    order_type: Option<String>,
    status: Option<String>,
}

impl CompiledFilter {
    pub fn matches(&self, record: &Order) -> bool {
        if let Some(re) = &self.query {
            let hit = order::SEARCHABLE_FIELDS.iter().any(|field| {
                matches!(record.get(*field), Some(Value::String(s)) if re.is_match(s))
            });
            if !hit {
                return false;
            }
        }

        exact(record, order::ORDER_TYPE, self.order_type.as_deref())
            && exact(record, order::STATUS, self.status.as_deref())
    }
}

fn exact(record: &Order, field: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => matches!(record.get(field), Some(Value::String(s)) if s == w),
    }
}

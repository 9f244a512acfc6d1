//! Query parameters and pagination utilities

use crate::core::error::RequestError;
use serde::{Deserialize, Serialize};

/// Page selection for `GET /api/v1/order`
///
/// Pages are zero-based: `page=0&size=10` returns the first ten records,
/// `page=1&size=10` the next ten.
///
/// # Example
/// ```rust,ignore
/// GET /api/v1/order?page=2&size=25   // skips 50, returns at most 25
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,

    /// Number of records per page, at least 1
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Reject page sizes the store cannot honour.
    ///
    /// A size of 0 would mean "no limit" to the document store.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.size == 0 {
            return Err(RequestError::InvalidPage {
                message: "size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Number of pages needed to show `total` records at this page size
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.size.max(1))
    }
}

/// Body of `GET /api/v1/total-order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalOrders {
    pub total_order: u64,
}

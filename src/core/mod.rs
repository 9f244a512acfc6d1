//! Core module containing the order model, filters, updates and the store trait

pub mod error;
pub mod filter;
pub mod order;
pub mod query;
pub mod service;
pub mod update;

pub use error::{ConfigError, OrderDeskError, RequestError, StorageError};
pub use filter::{CompiledFilter, OrderFilter};
pub use order::{DeleteOutcome, InsertOutcome, Order, UpdateOutcome};
pub use query::{PageRequest, TotalOrders};
pub use service::OrderStore;
pub use update::{OrderPatch, UpdateSet};

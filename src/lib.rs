//! # order-desk
//!
//! A small REST service over a single MongoDB collection of purchase orders.
//!
//! ## Features
//!
//! - **Schema-free orders**: any JSON object is stored as sent
//! - **Search**: case-insensitive text query plus exact `orderType`/`status`
//! - **Pagination**: zero-based `page`/`size` with a total-count endpoint
//! - **Partial updates**: `name`, `email`, `shipping` copied only when truthy
//! - **Business-key mutations**: updates and deletes match on `orderID`
//! - **Pluggable storage**: MongoDB in production, in-memory for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_desk::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryOrderStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod orders;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DeleteOutcome, InsertOutcome, Order, OrderDeskError, OrderFilter, OrderPatch, OrderStore,
        PageRequest, TotalOrders, UpdateOutcome, UpdateSet,
    };

    // === Handlers ===
    pub use crate::orders::AppState;

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoOrderStore;

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}

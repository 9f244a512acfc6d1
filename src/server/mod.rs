//! Server module for building the HTTP service
//!
//! `ServerBuilder` wires the injected order store into:
//! - the `/api/v1/*` order routes
//! - the liveness (`/`) and health (`/health`, `/healthz`) routes

pub mod builder;
pub mod rest;
pub mod router;

pub use builder::ServerBuilder;
pub use rest::RestExposure;

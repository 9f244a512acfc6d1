//! Order endpoints

pub mod handlers;

pub use handlers::AppState;

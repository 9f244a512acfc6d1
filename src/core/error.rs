//! Typed error handling for the order service
//!
//! Store implementations return `anyhow::Result`; handlers turn failures into
//! an [`OrderDeskError`], which knows its HTTP status and response body.
//!
//! # Error Categories
//!
//! - [`StorageError`]: the document store failed. Answered with 500 and the
//!   `UNHANDLED_FAULT` code.
//! - [`RequestError`]: the request could not be turned into a store call.
//! - [`ConfigError`]: configuration could not be loaded.
//! - `Search`: failure of the filtered search endpoint, which answers with the
//!   fixed body `{"error": "Internal Server Error"}`.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>, OrderDeskError> {
//!     let orders = state
//!         .store
//!         .list_all()
//!         .await
//!         .map_err(|e| OrderDeskError::unhandled("list orders", e))?;
//!     Ok(Json(orders))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type of the service
#[derive(Debug)]
pub enum OrderDeskError {
    /// Document store errors
    Storage(StorageError),

    /// Malformed requests
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Filtered search failed
    Search { message: String },
}

impl fmt::Display for OrderDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDeskError::Storage(e) => write!(f, "{}", e),
            OrderDeskError::Request(e) => write!(f, "{}", e),
            OrderDeskError::Config(e) => write!(f, "{}", e),
            OrderDeskError::Search { message } => write!(f, "Order search failed: {}", message),
        }
    }
}

impl std::error::Error for OrderDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderDeskError::Storage(e) => Some(e),
            OrderDeskError::Request(e) => Some(e),
            OrderDeskError::Config(e) => Some(e),
            OrderDeskError::Search { .. } => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl OrderDeskError {
    /// A store failure on an endpoint without its own error handling
    pub fn unhandled(operation: &str, err: anyhow::Error) -> Self {
        OrderDeskError::Storage(StorageError::OperationFailed {
            operation: operation.to_string(),
            message: format!("{:#}", err),
        })
    }

    /// A failure of the filtered search endpoint
    pub fn search(err: impl fmt::Display) -> Self {
        OrderDeskError::Search {
            message: err.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderDeskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderDeskError::Request(e) => e.status_code(),
            OrderDeskError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderDeskError::Search { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderDeskError::Storage(_) => "UNHANDLED_FAULT",
            OrderDeskError::Request(e) => e.error_code(),
            OrderDeskError::Config(_) => "CONFIG_ERROR",
            OrderDeskError::Search { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for OrderDeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }

        match self {
            OrderDeskError::Search { .. } => (
                status,
                Json(serde_json::json!({ "error": "Internal Server Error" })),
            )
                .into_response(),
            other => (status, Json(other.to_response())).into_response(),
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the document store
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// A store operation failed
    OperationFailed { operation: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::OperationFailed { operation, message } => {
                write!(f, "Failed to {}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for OrderDeskError {
    fn from(err: StorageError) -> Self {
        OrderDeskError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// Invalid request body
    InvalidBody { message: String },

    /// Invalid pagination parameters
    InvalidPage { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::InvalidPage { message } => {
                write!(f, "Invalid page request: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidPage { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidPage { .. } => "INVALID_PAGE",
        }
    }
}

impl From<RequestError> for OrderDeskError {
    fn from(err: RequestError) -> Self {
        OrderDeskError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A required setting was not provided
    MissingField { field: String },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::MissingField { field } => {
                write!(f, "Missing required setting '{}'", field)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for OrderDeskError {
    fn from(err: ConfigError) -> Self {
        OrderDeskError::Config(err)
    }
}

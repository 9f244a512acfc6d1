//! Configuration loading and management
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, an optional YAML file named by `ORDER_DESK_CONFIG`,
//! then environment variables (a `.env` file is honoured by the binary).

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional YAML config file
pub const CONFIG_PATH_ENV: &str = "ORDER_DESK_CONFIG";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Database user (`DB_USER`)
    pub db_user: Option<String>,

    /// Database password (`DB_PASS`)
    pub db_pass: Option<String>,

    /// Atlas cluster host (`DB_CLUSTER`)
    pub cluster_host: String,

    /// Full connection string, bypassing user/pass/cluster (`DATABASE_URI`)
    pub database_uri: Option<String>,

    /// Database name (`DB_NAME`)
    pub database: String,

    /// Collection holding the orders (`DB_COLLECTION`)
    pub collection: String,

    /// Listen address (`HOST`)
    pub host: String,

    /// Listen port (`PORT`)
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_user: None,
            db_pass: None,
            cluster_host: "cluster0.mp2awoi.mongodb.net".to_string(),
            database_uri: None,
            database: "yoxaxTaskDb".to_string(),
            collection: "order".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })
    }

    /// Load from the process environment, reading the YAML file first if
    /// `ORDER_DESK_CONFIG` points at one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DB_USER") {
            self.db_user = Some(v);
        }
        if let Some(v) = lookup("DB_PASS") {
            self.db_pass = Some(v);
        }
        if let Some(v) = lookup("DB_CLUSTER") {
            self.cluster_host = v;
        }
        if let Some(v) = lookup("DATABASE_URI") {
            self.database_uri = Some(v);
        }
        if let Some(v) = lookup("DB_NAME") {
            self.database = v;
        }
        if let Some(v) = lookup("DB_COLLECTION") {
            self.collection = v;
        }
        if let Some(v) = lookup("HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("PORT") {
            self.port = v.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                value: v.clone(),
                message: "expected a port number".to_string(),
            })?;
        }
        Ok(self)
    }

    /// MongoDB connection string
    ///
    /// `database_uri` wins when set; otherwise an Atlas SRV URI is assembled
    /// from the credentials and cluster host.
    pub fn connection_uri(&self) -> Result<String, ConfigError> {
        if let Some(uri) = &self.database_uri {
            return Ok(uri.clone());
        }

        let user = self.db_user.as_deref().ok_or_else(|| ConfigError::MissingField {
            field: "DB_USER".to_string(),
        })?;
        let pass = self.db_pass.as_deref().ok_or_else(|| ConfigError::MissingField {
            field: "DB_PASS".to_string(),
        })?;

        Ok(format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            user, pass, self.cluster_host
        ))
    }

    /// Socket address to bind, e.g. `0.0.0.0:5000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

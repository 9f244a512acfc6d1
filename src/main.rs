//! order-desk server binary
//!
//! Reads configuration from the environment (and `.env`), connects to
//! MongoDB and serves the order API until Ctrl+C or SIGTERM.

use anyhow::Result;
use order_desk::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_desk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;
    let store = MongoOrderStore::connect(&config).await?;

    // An unreachable database is reported but does not stop the server.
    match store.ping().await {
        Ok(()) => tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Pinged your deployment. Connected to MongoDB"
        ),
        Err(e) => tracing::error!("MongoDB ping failed: {:#}", e),
    }

    ServerBuilder::new()
        .with_store(store)
        .serve(&config.bind_addr())
        .await
}

//! Storage adapter for teachers and courses.
//!
//! Production traffic goes through [`store::MongoStore`]; tests and local
//! experiments can use [`store::MemoryStore`]. Both sit behind the
//! [`store::DocumentStore`] trait so the repository and HTTP layers never see
//! the driver directly.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use mongodb::{Client, Database};

pub use error::StoreError;

/// Shared handle to whichever document store backs the process.
pub type DbStore = Arc<dyn store::DocumentStore>;

/// Connect to MongoDB and select the given database.
///
/// The driver connects lazily, so call [`health_check`] afterwards to fail
/// fast on an unreachable server.
pub async fn connect(database_url: &str, database_name: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(database_url).await?;
    tracing::debug!(database = database_name, "MongoDB client created");
    Ok(client.database(database_name))
}

/// Round-trip to the store to verify it is reachable.
pub async fn health_check(store: &dyn store::DocumentStore) -> Result<(), StoreError> {
    store.ping().await
}

/// Failure raised by a [`DocumentStore`](crate::store::DocumentStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Error reported by the MongoDB driver (network, server, serialization).
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// A stored document did not have the expected shape.
    #[error("Malformed document: {0}")]
    Decode(String),
}

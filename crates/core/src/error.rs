#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: write secret mismatch")]
    Forbidden,
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store holding teachers and courses.
    pub store: lyceum_db::DbStore,
    /// Server configuration, including the write secret.
    pub config: Arc<ServerConfig>,
}

pub mod resources;

use axum::Router;
use lyceum_core::resource::{Course, Teacher};

use crate::state::AppState;

/// Build the full route table.
///
/// Route hierarchy:
///
/// ```text
/// /teachers                  create (POST)
/// /teachers/{language}       localized page (GET)
/// /teachers/{id}             update (PUT), delete (DELETE)
///
/// /courses                   create (POST)
/// /courses/{language}        localized page (GET)
/// /courses/{id}              update (PUT), delete (DELETE)
/// ```
///
/// Anything else falls through to Axum's default 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resources::router::<Teacher>())
        .merge(resources::router::<Course>())
}

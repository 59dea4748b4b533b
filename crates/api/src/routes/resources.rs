use axum::routing::{get, post};
use axum::Router;
use lyceum_core::resource::Resource;

use crate::handlers::resources;
use crate::state::AppState;

/// Routes for one collection, mounted at `/{collection}`.
///
/// ```text
/// POST   /{collection}          -> create
/// GET    /{collection}/{key}    -> list      (key is a language code)
/// PUT    /{collection}/{key}    -> update    (key is a record id)
/// DELETE /{collection}/{key}    -> delete    (key is a record id)
/// ```
///
/// The language and the id share one path segment, so they share one
/// parameter name; the method decides how it is read.
pub fn router<R: Resource>() -> Router<AppState> {
    let base = format!("/{}", R::KIND.collection());

    Router::new()
        .route(&base, post(resources::create::<R>))
        .route(
            &format!("{base}/{{key}}"),
            get(resources::list::<R>)
                .put(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
}

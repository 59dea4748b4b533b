//! Handlers for the teacher and course endpoints.
//!
//! Each handler is generic over the resource marker and is instantiated once
//! per collection in [`crate::routes::resources`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lyceum_core::error::CoreError;
use lyceum_core::language::Language;
use lyceum_core::pagination::PageRequest;
use lyceum_core::resource::{Resource, ResourceFields};
use lyceum_db::repositories::ResourceRepo;
use serde::Deserialize;

use crate::auth::require_write_access;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::LocalizedListResponse;
use crate::state::AppState;

/// Body of a create or update request: the content fields plus `auth`.
#[derive(Debug, Default, Deserialize)]
pub struct WriteRequest {
    #[serde(flatten)]
    pub fields: ResourceFields,
    #[serde(default)]
    pub auth: Option<String>,
}

/// Body of a delete request.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub auth: Option<String>,
}

/// GET /{collection}/{language}?page=&perpage=
///
/// One page of records projected onto `language`.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Path(language): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let language: Language = language.parse()?;
    let Query(params) = params?;
    let page = PageRequest::new(params.page, params.perpage)?;

    let result = ResourceRepo::<R>::list_localized(state.store.as_ref(), language, page).await?;

    Ok(Json(LocalizedListResponse::new(R::KIND, result)))
}

/// POST /{collection}
///
/// Create a record. Missing content fields are stored as absent.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let request = write_request(payload)?;
    require_write_access(
        &state.config.write_secret,
        request.auth.as_deref(),
        R::KIND,
        "create",
    )?;

    let record = ResourceRepo::<R>::create(state.store.as_ref(), &request.fields).await?;

    tracing::info!(kind = R::KIND.collection(), id = %record.id, "Record created");

    Ok(Json(record))
}

/// PUT /{collection}/{id}
///
/// Replace the content fields of an existing record.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let request = write_request(payload)?;
    require_write_access(
        &state.config.write_secret,
        request.auth.as_deref(),
        R::KIND,
        "update",
    )?;

    let updated = ResourceRepo::<R>::update(state.store.as_ref(), &id, &request.fields).await?;
    let record = updated.ok_or_else(|| not_found::<R>(id))?;

    tracing::info!(kind = R::KIND.collection(), id = %record.id, "Record updated");

    Ok(Json(record))
}

/// DELETE /{collection}/{id}
///
/// Remove a record. A missing or unparseable body counts as a bad secret.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let auth = payload.ok().and_then(|Json(body)| body.auth);
    require_write_access(&state.config.write_secret, auth.as_deref(), R::KIND, "delete")?;

    if !ResourceRepo::<R>::delete(state.store.as_ref(), &id).await? {
        return Err(not_found::<R>(id));
    }

    tracing::info!(kind = R::KIND.collection(), %id, "Record deleted");

    Ok(format!("{} deleted", R::KIND.entity()))
}

/// A body sent without a JSON content type is read as empty, so the write
/// fails the secret check rather than the body parse.
fn write_request(payload: Result<Json<WriteRequest>, JsonRejection>) -> AppResult<WriteRequest> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(WriteRequest::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

fn not_found<R: Resource>(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::KIND.entity(),
        id,
    })
}

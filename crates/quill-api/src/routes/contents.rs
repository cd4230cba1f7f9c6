//! Routes for content records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use quill_content::application::{command_handlers, query_handlers};
use quill_content::domain::commands::{CreateContent, PatchContent, ReplaceContent};
use quill_core::model::Content;

use crate::error::ApiError;
use crate::extract::{Payload, RawId};
use crate::state::AppState;

/// GET /contents
async fn list_contents(State(state): State<AppState>) -> Result<Json<Vec<Content>>, ApiError> {
    let contents = query_handlers::list_contents(state.store.as_ref()).await?;
    Ok(Json(contents))
}

/// GET /contents/{id}
async fn get_content(
    State(state): State<AppState>,
    RawId(id): RawId,
) -> Result<Json<Content>, ApiError> {
    let content = query_handlers::get_content(&id, state.store.as_ref()).await?;
    Ok(Json(content))
}

/// POST /contents
async fn create_content(
    State(state): State<AppState>,
    Payload(command): Payload<CreateContent>,
) -> Result<(StatusCode, Json<Content>), ApiError> {
    let created = command_handlers::handle_create(command, state.store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /contents/{id}
async fn replace_content(
    State(state): State<AppState>,
    RawId(id): RawId,
    Payload(command): Payload<ReplaceContent>,
) -> Result<Json<Content>, ApiError> {
    let replaced = command_handlers::handle_replace(&id, command, state.store.as_ref()).await?;
    Ok(Json(replaced))
}

/// PATCH /contents/{id}
async fn patch_content(
    State(state): State<AppState>,
    RawId(id): RawId,
    Payload(command): Payload<PatchContent>,
) -> Result<Json<Content>, ApiError> {
    let updated = command_handlers::handle_patch(&id, command, state.store.as_ref()).await?;
    Ok(Json(updated))
}

/// DELETE /contents/{id}
async fn delete_content(
    State(state): State<AppState>,
    RawId(id): RawId,
) -> Result<StatusCode, ApiError> {
    command_handlers::handle_delete(&id, state.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for content records.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contents", get(list_contents).post(create_content))
        .route(
            "/contents/{id}",
            get(get_content)
                .put(replace_content)
                .patch(patch_content)
                .delete(delete_content),
        )
}

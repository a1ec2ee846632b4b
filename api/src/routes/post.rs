use crate::{
    AppState,
    admin::PostAction,
    dto::{AdminScreen, PostForm, PublishRequest},
    errors::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

/// POST /admin/posts/new
pub async fn open_new_post(State(state): State<AppState>) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.open_new_post();

    Json(view.screen().await)
}

/// POST /admin/posts/:id/edit
pub async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    view.on_post_action(PostAction::Edit { id }).await?;

    Ok(Json(view.screen().await))
}

/// PUT /admin/posts/form
/// Body: { "title": "...", "content": "...", "published": false, "author_id": "..." }
pub async fn fill_post_form(
    State(state): State<AppState>,
    Json(form): Json<PostForm>,
) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.set_post_form(form);

    Json(view.screen().await)
}

/// POST /admin/posts/form/submit
pub async fn submit_post_form(
    State(state): State<AppState>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    let mode = view.post_dialog().mode;
    view.submit_post().await?;

    info!("Post form submitted ({:?})", mode);

    Ok(Json(view.screen().await))
}

/// POST /admin/posts/form/close
pub async fn close_post_form(State(state): State<AppState>) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.close_post_dialog();

    Json(view.screen().await)
}

/// POST /admin/posts/:id/published
/// Body: { "published": true }
pub async fn set_published(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PublishRequest>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    view.on_post_action(PostAction::SetPublished {
        id,
        published: payload.published,
    })
    .await?;

    Ok(Json(view.screen().await))
}

/// DELETE /admin/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    view.on_post_action(PostAction::Delete { id }).await?;

    Ok(Json(view.screen().await))
}

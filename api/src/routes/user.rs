use crate::{
    AppState,
    admin::UserAction,
    dto::{AdminScreen, UserForm},
    errors::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

/// POST /admin/users/new
pub async fn open_new_user(State(state): State<AppState>) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.open_new_user();

    Json(view.screen().await)
}

/// POST /admin/users/:id/edit
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    view.on_user_action(UserAction::Edit { id }).await?;

    Ok(Json(view.screen().await))
}

/// PUT /admin/users/form
/// Body: { "name": "...", "email": "..." }
pub async fn fill_user_form(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.set_user_form(form);

    Json(view.screen().await)
}

/// POST /admin/users/form/submit
pub async fn submit_user_form(
    State(state): State<AppState>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    let mode = view.user_dialog().mode;
    view.submit_user().await?;

    info!("User form submitted ({:?})", mode);

    Ok(Json(view.screen().await))
}

/// POST /admin/users/form/close
pub async fn close_user_form(State(state): State<AppState>) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    view.close_user_dialog();

    Json(view.screen().await)
}

/// DELETE /admin/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminScreen>, ApiError> {
    let mut view = state.view.lock().await;
    view.on_user_action(UserAction::Delete { id }).await?;

    Ok(Json(view.screen().await))
}

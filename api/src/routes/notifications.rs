use crate::{AppState, notify::Notification};
use axum::{Json, extract::State};

/// GET /notifications
/// Hands out every pending notification once.
pub async fn drain_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifier.drain())
}

use crate::{
    AppState,
    dto::{AdminQuery, AdminScreen},
};
use axum::{
    Json,
    extract::{Query, State},
};

/// GET /admin?search=...&tab=users|posts
/// Omitted parameters keep their current value.
pub async fn admin_screen(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
) -> Json<AdminScreen> {
    let mut view = state.view.lock().await;
    if let Some(search) = params.search {
        view.set_search(search);
    }
    if let Some(tab) = params.tab {
        view.select_tab(tab);
    }

    Json(view.screen().await)
}

/// POST /admin/refresh
pub async fn refresh(State(state): State<AppState>) -> Json<AdminScreen> {
    let view = state.view.lock().await;
    view.refresh().await;

    Json(view.screen().await)
}

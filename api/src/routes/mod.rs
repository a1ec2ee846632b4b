mod admin;
mod health;
mod landing;
mod notifications;
mod post;
mod user;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(landing::landing))
        .route("/notifications", get(notifications::drain_notifications))
        // Admin screen
        .route("/admin", get(admin::admin_screen))
        .route("/admin/refresh", post(admin::refresh))
        // Users tab
        .route("/admin/users/new", post(user::open_new_user))
        .route("/admin/users/form", put(user::fill_user_form))
        .route("/admin/users/form/submit", post(user::submit_user_form))
        .route("/admin/users/form/close", post(user::close_user_form))
        .route("/admin/users/{id}/edit", post(user::edit_user))
        .route("/admin/users/{id}", delete(user::delete_user))
        // Posts tab
        .route("/admin/posts/new", post(post::open_new_post))
        .route("/admin/posts/form", put(post::fill_post_form))
        .route("/admin/posts/form/submit", post(post::submit_post_form))
        .route("/admin/posts/form/close", post(post::close_post_form))
        .route("/admin/posts/{id}/edit", post(post::edit_post))
        .route("/admin/posts/{id}/published", post(post::set_published))
        .route("/admin/posts/{id}", delete(post::delete_post))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

use axum::Json;

/// GET /
pub async fn landing() -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "title": "Blog administration",
      "description": "Manage users and their posts from a single panel.",
      "links": { "admin": "/admin" }
    }))
}

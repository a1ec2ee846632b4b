use blog_admin::{AppState, config::Config, routes};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let state = AppState::new(config.build_store());
    state.load_in_background();

    let app = routes::router(state);

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /health                        - Health check");
    info!("  GET    /                              - Landing");
    info!("  GET    /admin?search=&tab=            - Admin screen");
    info!("  POST   /admin/refresh                 - Re-fetch users and posts");
    info!("  POST   /admin/{{users,posts}}/new       - Open the create dialog");
    info!("  POST   /admin/{{users,posts}}/:id/edit  - Open the edit dialog");
    info!("  PUT    /admin/{{users,posts}}/form      - Fill the dialog's form");
    info!("  POST   /admin/{{users,posts}}/form/submit");
    info!("  POST   /admin/{{users,posts}}/form/close");
    info!("  POST   /admin/posts/:id/published     - Publish or unpublish");
    info!("  DELETE /admin/{{users,posts}}/:id       - Delete");
    info!("  GET    /notifications                 - Drain notifications");

    axum::serve(listener, app).await
}

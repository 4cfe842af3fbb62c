pub mod routes;
pub mod state;
pub mod static_files;

use crate::config::TomlConfig;
use crate::utils::error::Result;
use axum::{routing::get, Router};
use routes::*;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/portfolio", get(portfolio_handler))
        .route("/api/data", get(portfolio_handler))
        .route("/api/profile", get(profile_handler))
        .route("/api/about", get(profile_handler))
        .route(
            "/api/contact",
            get(contact_info_handler).post(contact_submit_handler),
        )
        .route("/api/skills", get(skills_handler))
        .route("/api/experience", get(experience_handler))
        .route("/api/volunteer", get(volunteer_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/site", get(site_handler))
        .route("/api/legal", get(legal_handler))
        .route("/api/homelab", get(homelab_handler))
        .route("/api/status/monitors", get(status_monitors_handler))
        .merge(static_files::static_routes(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &TomlConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = build_router(state, Path::new(&config.server.static_dir));

    let address = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("🚀 Server running on http://{}", address);
    tracing::info!("  GET  /api/portfolio        - complete portfolio data");
    tracing::info!("  GET  /api/about            - profile and contact info");
    tracing::info!("  GET  /api/skills | /api/experience | /api/projects");
    tracing::info!("  GET  /api/status/monitors  - status monitoring proxy");
    tracing::info!("  POST /api/contact          - contact form relay");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

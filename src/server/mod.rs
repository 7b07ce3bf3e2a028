//! HTTP API server.
//!
//! A thin axum surface over [`crate::workspace::Workspace`]: the same
//! operations the CLI calls, exposed as the dashboard's REST API.
//! Routing is the only thing that lives here; behavior belongs to the
//! workspace layer.

pub mod error;
pub mod routes;

pub use error::ApiError;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::workspace::Workspace;

/// Shared server state.
pub type AppState = Arc<Workspace>;

/// Build the API router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health_handler))
        .route(
            "/api/tasks",
            get(routes::list_tasks_handler).post(routes::create_task_handler),
        )
        .route(
            "/api/tasks/{id}",
            put(routes::update_task_handler).delete(routes::delete_task_handler),
        )
        .route(
            "/api/clients",
            get(routes::list_clients_handler).post(routes::create_client_handler),
        )
        .route(
            "/api/clients/{id}",
            put(routes::update_client_handler).delete(routes::delete_client_handler),
        )
        .route(
            "/api/prospects",
            get(routes::list_prospects_handler).post(routes::create_prospect_handler),
        )
        .route("/api/prospects/{id}", put(routes::update_prospect_handler))
        .route(
            "/api/projects",
            get(routes::list_projects_handler).post(routes::create_project_handler),
        )
        .route("/api/projects/{id}", put(routes::update_project_handler))
        .route("/api/financials", get(routes::financials_handler))
        .route("/api/financials/revenue", post(routes::log_revenue_handler))
        .route("/api/financials/expense", post(routes::log_expense_handler))
        .route(
            "/api/tokens",
            get(routes::list_tokens_handler).post(routes::log_token_handler),
        )
        .route(
            "/api/checkins",
            get(routes::list_checkins_handler).post(routes::log_checkin_handler),
        )
        .route(
            "/api/ideas",
            get(routes::list_ideas_handler).post(routes::create_idea_handler),
        )
        .route(
            "/api/reviews",
            get(routes::list_reviews_handler).post(routes::create_review_handler),
        )
        .route("/api/activity", get(routes::activity_handler))
        .route("/api/memory", get(routes::memory_handler))
        .route("/api/export", get(routes::export_handler))
        .route("/api/import", post(routes::import_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until shutdown.
///
/// # Errors
///
/// Returns an error if the workspace cannot be bootstrapped or the
/// listener cannot bind.
pub async fn serve(workspace: Workspace, addr: SocketAddr) -> Result<()> {
    workspace.ensure_ready()?;

    info!(
        data_dir = %workspace.paths().data_dir.display(),
        memory_dir = %workspace.paths().memory_dir.display(),
        %addr,
        "Life OS server starting"
    );

    let app = router(Arc::new(workspace));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

//! API route handlers.
//!
//! Handlers stay thin: extract, call the workspace, serialize. List
//! endpoints return bare arrays (or the ledger object) exactly as the
//! dashboard consumes them; deletes return `{success}`.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::model::{
    ActivityEntry, Checkin, CheckinDraft, Client, ClientDraft, ClientPatch, FinancialEntry,
    FinancialEntryDraft, Idea, IdeaDraft, Ledger, Project, ProjectDraft, ProjectPatch, Prospect,
    ProspectDraft, ProspectPatch, Review, ReviewDraft, Task, TaskDraft, TaskPatch, TokenLog,
    TokenLogDraft,
};
use crate::snapshot::{Snapshot, export_all, import_all};
use crate::store::activity::DEFAULT_LIMIT;
use crate::store::today_stamp;

use super::error::ApiError;
use super::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

// ─────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /api/health
pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: crate::store::now_rfc3339(),
    })
}

// ─────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────

/// GET /api/tasks
pub async fn list_tasks_handler(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.list_tasks())
}

/// POST /api/tasks
pub async fn create_task_handler(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> ApiResult<Task> {
    Ok(Json(state.add_task(draft)?))
}

/// PUT /api/tasks/:id
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Task> {
    Ok(Json(state.update_task(&id, &patch)?))
}

/// `{success}` body shared by delete and import responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// DELETE /api/tasks/:id
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SuccessResponse> {
    let success = state.delete_task(&id)?;
    Ok(Json(SuccessResponse { success }))
}

// ─────────────────────────────────────────────────────────────
// Clients
// ─────────────────────────────────────────────────────────────

/// GET /api/clients
pub async fn list_clients_handler(State(state): State<AppState>) -> Json<Vec<Client>> {
    Json(state.list_clients())
}

/// POST /api/clients
pub async fn create_client_handler(
    State(state): State<AppState>,
    Json(draft): Json<ClientDraft>,
) -> ApiResult<Client> {
    Ok(Json(state.add_client(draft)?))
}

/// PUT /api/clients/:id
pub async fn update_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ClientPatch>,
) -> ApiResult<Client> {
    Ok(Json(state.update_client(&id, &patch)?))
}

/// DELETE /api/clients/:id
pub async fn delete_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SuccessResponse> {
    let success = state.delete_client(&id)?;
    Ok(Json(SuccessResponse { success }))
}

// ─────────────────────────────────────────────────────────────
// Prospects
// ─────────────────────────────────────────────────────────────

/// GET /api/prospects
pub async fn list_prospects_handler(State(state): State<AppState>) -> Json<Vec<Prospect>> {
    Json(state.list_prospects())
}

/// POST /api/prospects
pub async fn create_prospect_handler(
    State(state): State<AppState>,
    Json(draft): Json<ProspectDraft>,
) -> ApiResult<Prospect> {
    Ok(Json(state.add_prospect(draft)?))
}

/// PUT /api/prospects/:id
pub async fn update_prospect_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProspectPatch>,
) -> ApiResult<Prospect> {
    Ok(Json(state.update_prospect(&id, &patch)?))
}

// ─────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────

/// GET /api/projects
pub async fn list_projects_handler(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.list_projects())
}

/// POST /api/projects
pub async fn create_project_handler(
    State(state): State<AppState>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<Project> {
    Ok(Json(state.add_project(draft)?))
}

/// PUT /api/projects/:id
pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> ApiResult<Project> {
    Ok(Json(state.update_project(&id, &patch)?))
}

// ─────────────────────────────────────────────────────────────
// Financials
// ─────────────────────────────────────────────────────────────

/// GET /api/financials
pub async fn financials_handler(State(state): State<AppState>) -> Json<Ledger> {
    Json(state.financials())
}

/// POST /api/financials/revenue
pub async fn log_revenue_handler(
    State(state): State<AppState>,
    Json(draft): Json<FinancialEntryDraft>,
) -> ApiResult<FinancialEntry> {
    Ok(Json(state.log_revenue(draft)?))
}

/// POST /api/financials/expense
pub async fn log_expense_handler(
    State(state): State<AppState>,
    Json(draft): Json<FinancialEntryDraft>,
) -> ApiResult<FinancialEntry> {
    Ok(Json(state.log_expense(draft)?))
}

// ─────────────────────────────────────────────────────────────
// Tokens & check-ins
// ─────────────────────────────────────────────────────────────

/// GET /api/tokens
pub async fn list_tokens_handler(State(state): State<AppState>) -> Json<Vec<TokenLog>> {
    Json(state.list_token_logs())
}

/// POST /api/tokens
pub async fn log_token_handler(
    State(state): State<AppState>,
    Json(draft): Json<TokenLogDraft>,
) -> ApiResult<TokenLog> {
    Ok(Json(state.log_token_usage(draft)?))
}

/// GET /api/checkins
pub async fn list_checkins_handler(State(state): State<AppState>) -> Json<Vec<Checkin>> {
    Json(state.list_checkins())
}

/// POST /api/checkins
pub async fn log_checkin_handler(
    State(state): State<AppState>,
    Json(draft): Json<CheckinDraft>,
) -> ApiResult<Checkin> {
    Ok(Json(state.log_checkin(draft)?))
}

// ─────────────────────────────────────────────────────────────
// Ideas & reviews
// ─────────────────────────────────────────────────────────────

/// GET /api/ideas
pub async fn list_ideas_handler(State(state): State<AppState>) -> Json<Vec<Idea>> {
    Json(state.list_ideas())
}

/// POST /api/ideas
pub async fn create_idea_handler(
    State(state): State<AppState>,
    Json(draft): Json<IdeaDraft>,
) -> ApiResult<Idea> {
    Ok(Json(state.add_idea(draft)?))
}

/// GET /api/reviews
pub async fn list_reviews_handler(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.list_reviews())
}

/// POST /api/reviews
pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(draft): Json<ReviewDraft>,
) -> ApiResult<Review> {
    Ok(Json(state.add_review(draft)?))
}

// ─────────────────────────────────────────────────────────────
// Activity
// ─────────────────────────────────────────────────────────────

/// Query params for the activity feed.
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    /// Maximum entries to return (default 50).
    pub limit: Option<usize>,
}

/// GET /api/activity?limit=N
pub async fn activity_handler(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Json<Vec<ActivityEntry>> {
    Json(state.recent_activity(query.limit.unwrap_or(DEFAULT_LIMIT)))
}

// ─────────────────────────────────────────────────────────────
// Memory
// ─────────────────────────────────────────────────────────────

/// Query params for memory reads.
#[derive(Debug, Deserialize)]
pub struct MemoryQuery {
    /// One of `today`, `main`, `activities`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Day stamp for `activities`, defaults to today.
    pub date: Option<String>,
}

/// Memory read payload.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MemoryResponse {
    Day {
        date: String,
        content: String,
    },
    Main {
        file: &'static str,
        content: String,
    },
    Activities {
        activities: Vec<crate::store::journal::JournalEntry>,
    },
}

/// GET /api/memory?type=today|main|activities&date=YYYY-MM-DD
pub async fn memory_handler(
    State(state): State<AppState>,
    Query(query): Query<MemoryQuery>,
) -> ApiResult<MemoryResponse> {
    let journal = state.journal();
    match query.kind.as_str() {
        "today" => {
            let date = today_stamp();
            let content = journal
                .read_today()
                .unwrap_or_else(|| "No entries yet".to_string());
            Ok(Json(MemoryResponse::Day { date, content }))
        }
        "main" => {
            // Reads never fail visibly; an absent file reads as empty
            let content = journal
                .read_main()
                .unwrap_or_else(|| "No entries yet".to_string());
            Ok(Json(MemoryResponse::Main {
                file: "MEMORY.md",
                content,
            }))
        }
        "activities" => {
            let date = query.date.unwrap_or_else(today_stamp);
            Ok(Json(MemoryResponse::Activities {
                activities: journal.entries(&date),
            }))
        }
        other => Err(ApiError(crate::error::Error::InvalidArgument(format!(
            "unknown memory type: {other}"
        )))),
    }
}

// ─────────────────────────────────────────────────────────────
// Export / import
// ─────────────────────────────────────────────────────────────

/// GET /api/export
pub async fn export_handler(State(state): State<AppState>) -> Json<Snapshot> {
    Json(export_all(&state))
}

/// POST /api/import
pub async fn import_handler(
    State(state): State<AppState>,
    Json(snapshot): Json<Snapshot>,
) -> Json<SuccessResponse> {
    // Best-effort contract: the endpoint answers {success} either way
    match import_all(&state, &snapshot) {
        Ok(_) => Json(SuccessResponse { success: true }),
        Err(e) => {
            tracing::error!(error = %e, "snapshot import failed");
            Json(SuccessResponse { success: false })
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::router;
    use crate::workspace::Workspace;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::open(dir.path().join("workspace"));
        (dir, router(Arc::new(workspace)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, app) = test_app();
        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_task_crud_flow() {
        let (_dir, app) = test_app();

        let response = app
            .clone()
            .oneshot(post("/api/tasks", r#"{"title":"Ship spec","status":"todo"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["status"], "todo");
        let id = created["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("task-"));

        let response = app.clone().oneshot(get("/api/tasks")).await.unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], id.as_str());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/tasks/{id}"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"status":"completed"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["status"], "completed");
        assert_eq!(updated["title"], "Ship spec");
        assert!(updated["updatedAt"].is_string());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/tasks/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let deleted = body_json(response).await;
        assert_eq!(deleted["success"], true);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_404() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/tasks/task-missing")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"status":"completed"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "RECORD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_financials_flow() {
        let (_dir, app) = test_app();

        app.clone()
            .oneshot(post(
                "/api/financials/revenue",
                r#"{"amount":500,"description":"invoice","recurring":true}"#,
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(post(
                "/api/financials/expense",
                r#"{"amount":120,"description":"hosting"}"#,
            ))
            .await
            .unwrap();

        let response = app.oneshot(get("/api/financials")).await.unwrap();
        let ledger = body_json(response).await;
        assert_eq!(ledger["total"]["revenue"], 500.0);
        assert_eq!(ledger["total"]["expenses"], 120.0);
        assert_eq!(ledger["total"]["mrr"], 500.0);
    }

    #[tokio::test]
    async fn test_activity_limit_and_order() {
        let (_dir, app) = test_app();
        for i in 0..4 {
            app.clone()
                .oneshot(post(
                    "/api/clients",
                    &format!(r#"{{"name":"client {i}"}}"#),
                ))
                .await
                .unwrap();
        }

        let response = app.oneshot(get("/api/activity?limit=2")).await.unwrap();
        let activity = body_json(response).await;
        let entries = activity.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["message"], "New Client: client 3");
        assert_eq!(entries[1]["message"], "New Client: client 2");
    }

    #[tokio::test]
    async fn test_checkin_validation_is_400() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(post("/api/checkins", r#"{"energy":0,"focus":5}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_token_post_leaves_no_activity() {
        let (_dir, app) = test_app();
        app.clone()
            .oneshot(post("/api/tokens", r#"{"cost":0.42,"model":"opus"}"#))
            .await
            .unwrap();

        let response = app.clone().oneshot(get("/api/tokens")).await.unwrap();
        let tokens = body_json(response).await;
        assert_eq!(tokens.as_array().unwrap().len(), 1);
        assert_eq!(tokens[0]["model"], "opus");

        let response = app.oneshot(get("/api/activity")).await.unwrap();
        let activity = body_json(response).await;
        assert!(activity.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_today_and_activities() {
        let (_dir, app) = test_app();
        app.clone()
            .oneshot(post("/api/clients", r#"{"name":"Acme"}"#))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get("/api/memory?type=today"))
            .await
            .unwrap();
        let today = body_json(response).await;
        assert!(
            today["content"]
                .as_str()
                .unwrap()
                .contains("New Client: Acme")
        );

        let response = app
            .clone()
            .oneshot(get("/api/memory?type=activities"))
            .await
            .unwrap();
        let activities = body_json(response).await;
        assert_eq!(activities["activities"][0]["text"], "New Client: Acme");

        let response = app.oneshot(get("/api/memory?type=bogus")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let (_dir, source) = test_app();
        source
            .clone()
            .oneshot(post("/api/tasks", r#"{"title":"exported"}"#))
            .await
            .unwrap();

        let response = source.oneshot(get("/api/export")).await.unwrap();
        let snapshot = body_json(response).await;
        assert_eq!(snapshot["tasks"].as_array().unwrap().len(), 1);

        let (_dir2, target) = test_app();
        let response = target
            .clone()
            .oneshot(post("/api/import", &snapshot.to_string()))
            .await
            .unwrap();
        let imported = body_json(response).await;
        assert_eq!(imported["success"], true);

        let response = target.oneshot(get("/api/tasks")).await.unwrap();
        let tasks = body_json(response).await;
        assert_eq!(tasks[0]["title"], "exported");
    }
}

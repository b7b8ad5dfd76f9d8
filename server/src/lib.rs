//! HTTP todo store backed by SQLite.
//!
//! # Overview
//! Serves CRUD over `/api/todo` with axum. The `Db` handle is built once at
//! startup and injected into handlers through [`AppState`].

pub mod config;
pub mod db;
pub mod error;
pub mod types;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;

pub use db::Db;
pub use error::{AppError, StoreError};
pub use types::{TodoItem, TodoPayload};

/// Per-request context shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/api/todo", get(list_todos).post(create_todo))
        .route("/api/todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(AppState { db })
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = state.db.list().await?;
    tracing::debug!(count = items.len(), "listed todo items");
    Ok(Json(items))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, AppError> {
    tracing::debug!(id, "get todo item");
    Ok(Json(state.db.get(id).await?))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.db.insert(input.text, input.is_complete).await?;
    tracing::debug!(id = item.id, "created todo item");
    let location = format!("/api/todo/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TodoPayload>,
) -> Result<StatusCode, AppError> {
    if input.id != Some(id) {
        tracing::warn!(path_id = id, body_id = ?input.id, "update id mismatch");
        return Err(AppError::BadRequest);
    }
    state
        .db
        .replace(TodoItem {
            id,
            text: input.text,
            is_complete: input.is_complete,
        })
        .await?;
    tracing::debug!(id, "replaced todo item");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.delete(id).await?;
    tracing::debug!(id, "deleted todo item");
    Ok(StatusCode::NO_CONTENT)
}

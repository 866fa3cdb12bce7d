use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use todo_core::{CreateTodo, Todo, TodoStore, UpdateTodo};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::catch_panic::CatchPanicLayer;

pub mod error;

use error::ApiError;

pub type Db = Arc<RwLock<TodoStore>>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with(TodoStore::new())
}

/// Router over a caller-supplied store; tests use this to seed records.
pub fn app_with(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    // Each method+path pair is registered exactly once; axum panics at
    // registration time on an overlapping method route, so a duplicate
    // cannot silently shadow an earlier handler. The static `completed`
    // and `active` paths take precedence over the `{id}` capture.
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/completed", get(completed_todos))
        .route("/todos/active", get(active_todos))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn completed_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.completed())
}

async fn active_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.active())
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, ApiError> {
    db.read()
        .await
        .get(id)
        .map(Json)
        .map_err(|_| ApiError::TodoNotFound)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = db
        .write()
        .await
        .create(&input.task)
        .map_err(|_| ApiError::TaskRequired)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    db.write()
        .await
        .update(id, patch)
        .map(Json)
        .map_err(|_| ApiError::TodoNotFound)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, ApiError> {
    db.write()
        .await
        .delete(id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|_| ApiError::DeleteNotFound)
}

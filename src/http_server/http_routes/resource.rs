use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};

use crate::http_server::{error::ApiError, state::AppState};
use crate::resources::Resource;
use crate::services::ResourceService;

/// The five CRUD routes for one resource: `PATH` and `PATH/{id}`.
///
/// `{id}` is taken as text. An id naming no row is a 404 on GET and a silent
/// no-op on PUT and DELETE.
pub fn resource_routes<R: Resource>() -> Router<Arc<AppState>> {
    Router::new()
        .route(R::PATH, get(list::<R>).post(create::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
}

fn service<R: Resource>(app_state: &AppState) -> ResourceService<R> {
    ResourceService::new(app_state.db.clone())
}

async fn list<R: Resource>(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<R::Model>>, ApiError> {
    let rows = service::<R>(&app_state).list().await?;
    Ok(Json(rows))
}

async fn get_by_id<R: Resource>(
    State(app_state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Path(id) = id?;
    let row = service::<R>(&app_state).get(&id).await?;
    Ok(Json(row))
}

async fn create<R: Resource>(
    State(app_state): State<Arc<AppState>>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(input) = body?;
    let row = service::<R>(&app_state).create(input).await?;
    Ok(Json(row))
}

async fn update<R: Resource>(
    State(app_state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    service::<R>(&app_state).update(&id, input).await?;
    Ok(StatusCode::OK)
}

async fn delete<R: Resource>(
    State(app_state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service::<R>(&app_state).delete(&id).await?;
    Ok(StatusCode::OK)
}

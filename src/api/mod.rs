use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{Course, CourseDraft};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    courses: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", get(list_courses).post(create_course))
        .route(
            "/api/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        courses: state.courses.len().await,
    })
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.courses.list().await)
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = state.courses.get(&id).await?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let Json(draft) = payload?;
    let course = state.courses.create(draft).await;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CourseDraft>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    // an unknown id wins over a malformed body
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            state.courses.get(&id).await?;
            return Err(rejection.into());
        }
    };
    let course = state.courses.update(&id, draft).await?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.courses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

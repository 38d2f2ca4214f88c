use crate::db::models::{Course, InsertedId};
use crate::error::RosterError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, RosterError> {
    let courses = state.store.list_courses().await?;
    Ok(Json(courses))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, RosterError> {
    let course = state
        .store
        .course_by_id(id)
        .await?
        .ok_or(RosterError::CourseNotFound)?;
    Ok(Json(course))
}

pub async fn create_course(
    State(state): State<AppState>,
    body: Result<Json<Course>, JsonRejection>,
) -> Result<Json<InsertedId>, RosterError> {
    let Json(course) = body.map_err(|_| RosterError::InvalidInput)?;
    let id = state.store.insert_course(&course.name).await?;
    Ok(Json(InsertedId { id }))
}

/// Updating an id that does not exist succeeds with zero rows affected.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Course>, JsonRejection>,
) -> Result<StatusCode, RosterError> {
    let Json(course) = body.map_err(|_| RosterError::InvalidInput)?;
    state.store.update_course(id, &course.name).await?;
    Ok(StatusCode::OK)
}

/// Idempotent: deleting a missing id is a 200 no-op. Membership rows that
/// reference the course are not touched.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, RosterError> {
    state.store.delete_course(id).await?;
    Ok(StatusCode::OK)
}

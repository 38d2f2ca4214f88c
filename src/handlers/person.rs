use crate::db::models::{InsertedId, Person};
use crate::error::RosterError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, RosterError> {
    let persons = state.store.list_persons().await?;
    Ok(Json(persons))
}

/// The single-segment GET matches on either name column, not the id; see
/// the route table in `router.rs`.
pub async fn get_person_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Person>, RosterError> {
    let person = state
        .store
        .person_by_name(&name)
        .await?
        .ok_or(RosterError::PersonNotFound)?;
    Ok(Json(person))
}

pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<Person>, JsonRejection>,
) -> Result<Json<InsertedId>, RosterError> {
    let Json(person) = body.map_err(|_| RosterError::InvalidInput)?;
    let id = state.store.insert_person(&person).await?;
    state.store.replace_person_courses(id, &person.courses).await?;
    Ok(Json(InsertedId { id }))
}

/// Scalar columns update against the path id; the membership sync keys off
/// the id carried in the body.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Person>, JsonRejection>,
) -> Result<StatusCode, RosterError> {
    let Json(person) = body.map_err(|_| RosterError::InvalidInput)?;
    state.store.update_person(id, &person).await?;
    state
        .store
        .replace_person_courses(person.id, &person.courses)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, RosterError> {
    state.store.delete_person(id).await?;
    Ok(StatusCode::OK)
}

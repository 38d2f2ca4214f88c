use crate::db::Store;
use crate::handlers::course::{
    create_course, delete_course, get_course, list_courses, update_course,
};
use crate::handlers::person::{
    create_person, delete_person, get_person_by_name, list_persons, update_person,
};
use crate::middleware::log_requests;
use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::get,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Builds the full route table.
///
/// The person single-segment GET is the name lookup: `{id}` and `{name}`
/// occupy the same route shape, and the original surface resolves the
/// collision in favor of get-by-name. Lookup by id stays a store-level
/// operation with no route.
pub fn roster_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/course/",
            get(list_courses).post(create_course),
        )
        .route(
            "/api/course/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/api/person/",
            get(list_persons).post(create_person),
        )
        .route(
            "/api/person/{name}",
            get(get_person_by_name)
                .put(update_person)
                .delete(delete_person),
        )
        .fallback(not_found_handler)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

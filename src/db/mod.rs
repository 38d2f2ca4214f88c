//! Database module: models, schema, and the query store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (Postgres)
//! - `store.rs`: all SQL executed by the service, behind a cloneable `Store`

pub mod models;
pub mod schema;
pub mod store;

pub use models::{Course, InsertedId, Person};
pub use schema::POSTGRES_INIT;
pub use store::Store;

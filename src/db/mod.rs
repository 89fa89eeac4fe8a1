//! Database module: models, schema, and the repository actor.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `query.rs`: query-by-example filter consumed by the list operation
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod actor;
pub mod models;
pub mod query;
pub mod schema;

pub use models::{DbPlanet, NewPlanet};
pub use query::PlanetFilter;
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, spawn};

use crate::server::router::PlanetState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<PlanetState> {
    Router::new()
        .route(
            "/planets",
            post(handlers::create_planet).get(handlers::list_planets),
        )
        .route("/planets/name/{name}", get(handlers::get_planet_by_name))
        .route(
            "/planets/{id}",
            get(handlers::get_planet).delete(handlers::remove_planet),
        )
}

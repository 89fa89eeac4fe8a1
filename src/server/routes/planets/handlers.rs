use super::extract::ValidPlanet;
use crate::error::PlanetariumError;
use crate::server::router::PlanetState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planetarium_schema::Planet;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListParams {
    terrain: Option<String>,
    climate: Option<String>,
}

pub(super) async fn create_planet(
    State(state): State<PlanetState>,
    ValidPlanet(planet): ValidPlanet,
) -> Result<Response, PlanetariumError> {
    debug!(name = %planet.name, "Incoming planet create");

    let created = state.service.create(planet).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub(super) async fn get_planet(
    State(state): State<PlanetState>,
    Path(id): Path<i64>,
) -> Result<Response, PlanetariumError> {
    match state.service.get(id).await? {
        Some(planet) => Ok(Json(planet).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub(super) async fn get_planet_by_name(
    State(state): State<PlanetState>,
    Path(name): Path<String>,
) -> Result<Response, PlanetariumError> {
    match state.service.get_by_name(&name).await? {
        Some(planet) => Ok(Json(planet).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub(super) async fn list_planets(
    State(state): State<PlanetState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Planet>>, PlanetariumError> {
    let planets = state.service.list(params.terrain, params.climate).await?;
    Ok(Json(planets))
}

pub(super) async fn remove_planet(
    State(state): State<PlanetState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PlanetariumError> {
    state.service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

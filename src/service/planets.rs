use crate::db::{DbActorHandle, NewPlanet, PlanetFilter};
use crate::error::PlanetariumError;
use planetarium_schema::Planet;

/// Orchestration layer between the HTTP routes and the planet repository.
///
/// Holds no state of its own; every operation is a single repository call,
/// converting rows to the wire shape on the way out.
#[derive(Clone)]
pub struct PlanetService {
    db: DbActorHandle,
}

impl PlanetService {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }

    /// Persist a new planet and return it with its assigned id.
    /// Duplicate names and constraint failures propagate as-is.
    pub async fn create(&self, planet: Planet) -> Result<Planet, PlanetariumError> {
        let created = self.db.create(NewPlanet::from(planet)).await?;
        Ok(created.into())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Planet>, PlanetariumError> {
        Ok(self.db.get_by_id(id).await?.map(Planet::from))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, PlanetariumError> {
        Ok(self.db.get_by_name(name.to_string()).await?.map(Planet::from))
    }

    /// List planets, optionally filtered by exact terrain and/or climate.
    /// Absent parameters are wildcards via the query-by-example template.
    pub async fn list(
        &self,
        terrain: Option<String>,
        climate: Option<String>,
    ) -> Result<Vec<Planet>, PlanetariumError> {
        let template = Planet::template(climate, terrain);
        let filter = PlanetFilter::from_template(&template);
        let rows = self.db.list(filter).await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// Remove a planet by id. Removing an id that was never stored is a
    /// success, mirroring the repository's idempotent delete.
    pub async fn remove(&self, id: i64) -> Result<(), PlanetariumError> {
        self.db.delete_by_id(id).await
    }
}

use chrono::{DateTime, Utc};
use planetarium_schema::Planet;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored planet row. The bookkeeping timestamps never leave the
/// persistence layer; the wire shape is [`planetarium_schema::Planet`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPlanet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a planet row; the id is assigned by the datastore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl From<Planet> for NewPlanet {
    fn from(planet: Planet) -> Self {
        Self {
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
        }
    }
}

impl From<DbPlanet> for Planet {
    fn from(row: DbPlanet) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
        }
    }
}

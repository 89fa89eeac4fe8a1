use crate::db::models::{DbPlanet, NewPlanet};
use crate::db::query::PlanetFilter;
use crate::db::schema::SQLITE_INIT;
use crate::error::PlanetariumError;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a planet row and return it with its assigned id.
    Create(NewPlanet, RpcReplyPort<Result<DbPlanet, PlanetariumError>>),

    /// Look up a planet by id; absence is `None`, not an error.
    GetById(i64, RpcReplyPort<Result<Option<DbPlanet>, PlanetariumError>>),

    /// Look up a planet by exact name.
    GetByName(String, RpcReplyPort<Result<Option<DbPlanet>, PlanetariumError>>),

    /// List planets matching a query-by-example filter.
    List(PlanetFilter, RpcReplyPort<Result<Vec<DbPlanet>, PlanetariumError>>),

    /// Delete a planet by id; deleting a missing id is a no-op.
    DeleteById(i64, RpcReplyPort<Result<(), PlanetariumError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create(&self, new: NewPlanet) -> Result<DbPlanet, PlanetariumError> {
        ractor::call!(self.actor, DbActorMessage::Create, new)
            .map_err(|e| PlanetariumError::Rpc(format!("DbActor Create RPC failed: {e}")))?
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbPlanet>, PlanetariumError> {
        ractor::call!(self.actor, DbActorMessage::GetById, id)
            .map_err(|e| PlanetariumError::Rpc(format!("DbActor GetById RPC failed: {e}")))?
    }

    pub async fn get_by_name(&self, name: String) -> Result<Option<DbPlanet>, PlanetariumError> {
        ractor::call!(self.actor, DbActorMessage::GetByName, name)
            .map_err(|e| PlanetariumError::Rpc(format!("DbActor GetByName RPC failed: {e}")))?
    }

    pub async fn list(&self, filter: PlanetFilter) -> Result<Vec<DbPlanet>, PlanetariumError> {
        ractor::call!(self.actor, DbActorMessage::List, filter)
            .map_err(|e| PlanetariumError::Rpc(format!("DbActor List RPC failed: {e}")))?
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), PlanetariumError> {
        ractor::call!(self.actor, DbActorMessage::DeleteById, id)
            .map_err(|e| PlanetariumError::Rpc(format!("DbActor DeleteById RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Create(new, reply) => {
                let res = self.create_planet(&state.pool, new).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetById(id, reply) => {
                let res = self.get_planet_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetByName(name, reply) => {
                let res = self.get_planet_by_name(&state.pool, &name).await;
                let _ = reply.send(res);
            }
            DbActorMessage::List(filter, reply) => {
                let res = self.list_planets(&state.pool, &filter).await;
                let _ = reply.send(res);
            }
            DbActorMessage::DeleteById(id, reply) => {
                let res = self.delete_planet_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

const PLANET_COLUMNS: &str = "id, name, climate, terrain, created_at, updated_at";

impl DbActor {
    async fn create_planet(
        &self,
        pool: &SqlitePool,
        new: NewPlanet,
    ) -> Result<DbPlanet, PlanetariumError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbPlanet>(
            r#"
        INSERT INTO planets (name, climate, terrain, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, climate, terrain, created_at, updated_at
        "#,
        )
        .bind(&new.name)
        .bind(&new.climate)
        .bind(&new.terrain)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| classify_write_error(e, &new.name))?;

        Ok(row)
    }

    async fn get_planet_by_id(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbPlanet>, PlanetariumError> {
        let row = sqlx::query_as::<_, DbPlanet>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planets WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn get_planet_by_name(
        &self,
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<DbPlanet>, PlanetariumError> {
        let row = sqlx::query_as::<_, DbPlanet>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planets WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn list_planets(
        &self,
        pool: &SqlitePool,
        filter: &PlanetFilter,
    ) -> Result<Vec<DbPlanet>, PlanetariumError> {
        let predicates = filter.predicates();

        let mut sql = format!("SELECT {PLANET_COLUMNS} FROM planets");
        if !predicates.is_empty() {
            let clauses: Vec<&str> = predicates.iter().map(|(clause, _)| *clause).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, DbPlanet>(&sql);
        for (_, value) in &predicates {
            query = query.bind(*value);
        }

        let rows = query.fetch_all(pool).await?;
        Ok(rows)
    }

    async fn delete_planet_by_id(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<(), PlanetariumError> {
        // Idempotent: a DELETE that matches no row is still a success.
        sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

fn classify_write_error(err: sqlx::Error, name: &str) -> PlanetariumError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            PlanetariumError::DuplicateName(name.to_string())
        }
        sqlx::Error::Database(db) if db.is_check_violation() => {
            PlanetariumError::ConstraintViolation(db.message().to_string())
        }
        _ => PlanetariumError::Database(err),
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is unnamed so several handles (one per database) can coexist in
/// one process.
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), PlanetariumError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `planets` table (one planet per row, unique name)
///
/// The non-blank CHECK constraints back the boundary validation: a write that
/// slips past it with a blank field still fails at the datastore.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Planets (one planet per row, unique name)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS planets (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
    climate TEXT NOT NULL CHECK (length(trim(climate)) > 0),
    terrain TEXT NOT NULL CHECK (length(trim(terrain)) > 0),
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_planets_climate ON planets(climate);
CREATE INDEX IF NOT EXISTS idx_planets_terrain ON planets(terrain);
"#;

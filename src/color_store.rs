//! Persistent name-to-color cache backed by SQLite.
//!
//! The store guarantees each texture name is computed at most once across
//! runs: `resolve` returns the cached color when present and only falls back
//! to image reduction for names seen for the first time. All writes of a run
//! happen inside one transaction, committed once at shutdown; dropping the
//! store without committing rolls them back.

use image::Rgb;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::color_extract;
use crate::texture_index::TextureIndex;

/// Fallback color for names whose texture file is absent from the index.
pub const MISSING_TEXTURE_COLOR: Rgb<u8> = Rgb([255, 128, 128]);

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS colors (
  id INTEGER PRIMARY KEY,
  name TEXT UNIQUE,
  r INTEGER,
  g INTEGER,
  b INTEGER);
";

#[derive(Debug, thiserror::Error)]
pub enum ColorStoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the on-disk color cache, opened once per run.
pub struct ColorStore {
    connection: Connection,
}

impl ColorStore {
    /// Opens (or creates) the cache file at `path` and begins the run's
    /// single write transaction.
    pub fn open(path: &Path) -> Result<Self, ColorStoreError> {
        let connection = Connection::open(path)?;
        connection.execute_batch(SCHEMA)?;
        connection.execute_batch("BEGIN;")?;
        Ok(Self { connection })
    }

    /// Returns the stored color for `name`, if any.
    pub fn get(&self, name: &str) -> Result<Option<Rgb<u8>>, ColorStoreError> {
        let row = self
            .connection
            .query_row(
                "SELECT r, g, b FROM colors WHERE name = ?1",
                params![name],
                |row| Ok(Rgb([row.get(0)?, row.get(1)?, row.get(2)?])),
            )
            .optional()?;
        Ok(row)
    }

    /// Inserts a freshly computed color. Names are unique; callers check
    /// `get` first, so a conflict here is a programming error and surfaces
    /// as an sqlite error.
    pub fn insert(&self, name: &str, color: Rgb<u8>) -> Result<(), ColorStoreError> {
        self.connection.execute(
            "INSERT INTO colors (name, r, g, b) VALUES (?1, ?2, ?3, ?4)",
            params![name, color.0[0], color.0[1], color.0[2]],
        )?;
        Ok(())
    }

    /// Returns the number of cached entries, including uncommitted ones.
    pub fn entry_count(&self) -> Result<i64, ColorStoreError> {
        let count = self
            .connection
            .query_row("SELECT COUNT(*) FROM colors", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Resolves the color for `name`, whose texture is expected in the file
    /// `filename`.
    ///
    /// Cached names short-circuit without touching the filesystem. Otherwise
    /// the texture path is looked up in the index; a missing file substitutes
    /// the fallback color, while decode failures are fatal. The result is
    /// inserted before returning, so a second call is a pure cache hit.
    pub fn resolve(
        &self,
        name: &str,
        filename: &str,
        index: &TextureIndex,
    ) -> Result<Rgb<u8>, String> {
        if let Some(cached) = self
            .get(name)
            .map_err(|e| format!("Color cache lookup for '{}' failed: {}", name, e))?
        {
            return Ok(cached);
        }

        let color = match index.get(filename) {
            Some(path) => color_extract::representative_color(path)?,
            None => MISSING_TEXTURE_COLOR,
        };

        self.insert(name, color)
            .map_err(|e| format!("Color cache insert for '{}' failed: {}", name, e))?;

        Ok(color)
    }

    /// Commits the run's transaction and closes the store.
    pub fn commit(self) -> Result<(), ColorStoreError> {
        self.connection.execute_batch("COMMIT;")?;
        Ok(())
    }
}

//! SQLite database connection and schema management.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::task::SqliteTaskRepository;
use super::theme::SqliteThemeRepository;
use crate::db::{Database, DbError, DbResult};

/// Schema version stamped into `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const CREATE_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        completed INTEGER NOT NULL DEFAULT 0
    )
"#;

const CREATE_THEME_CONFIG: &str = r#"
    CREATE TABLE IF NOT EXISTS theme_config (
        id INTEGER PRIMARY KEY,
        isDarkMode INTEGER NOT NULL DEFAULT 0
    )
"#;

enum Location {
    File(PathBuf),
    Memory,
}

/// SQLite database implementation.
///
/// The pool is opened lazily and reopened transparently after [`close`],
/// so every repository call first makes sure a handle exists.
///
/// [`close`]: Database::close
pub struct SqliteDatabase {
    location: Location,
    pool: RwLock<Option<SqlitePool>>,
}

impl SqliteDatabase {
    /// Open (creating if absent) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let db = Self {
            location: Location::File(path.as_ref().to_path_buf()),
            pool: RwLock::new(None),
        };
        db.pool().await?;
        Ok(db)
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Contents are lost on [`Database::close`].
    pub async fn in_memory() -> DbResult<Self> {
        let db = Self {
            location: Location::Memory,
            pool: RwLock::new(None),
        };
        db.pool().await?;
        Ok(db)
    }

    /// Path of the backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    /// Whether a pool handle is currently held.
    pub async fn is_open(&self) -> bool {
        self.pool.read().await.is_some()
    }

    /// Schema version recorded in the database file.
    pub async fn schema_version(&self) -> DbResult<i64> {
        let pool = self.pool().await?;
        read_user_version(&pool).await.map_err(DbError::io)
    }

    /// Get the pool, opening it and bootstrapping the schema if needed.
    pub(crate) async fn pool(&self) -> DbResult<SqlitePool> {
        if let Some(pool) = self.pool.read().await.as_ref() {
            return Ok(pool.clone());
        }

        let mut guard = self.pool.write().await;
        // Another caller may have opened it while we waited for the lock
        if let Some(pool) = guard.as_ref() {
            return Ok(pool.clone());
        }

        let pool = self.connect().await?;
        if let Err(e) = bootstrap_schema(&pool).await {
            pool.close().await;
            return Err(e);
        }
        *guard = Some(pool.clone());
        Ok(pool)
    }

    async fn connect(&self) -> DbResult<SqlitePool> {
        let (options, max_connections) = match &self.location {
            Location::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(DbError::unavailable)?;
                }
                info!("Opening database at {:?}", path);
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                (options, 4)
            }
            Location::Memory => {
                debug!("Opening in-memory database");
                // A second connection would see a different, empty database
                let options =
                    SqliteConnectOptions::from_str("sqlite::memory:").map_err(DbError::unavailable)?;
                (options, 1)
            }
        };

        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(DbError::unavailable)
    }
}

async fn read_user_version(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await
}

/// Create the tables of schema version 1 unless they already exist.
async fn bootstrap_schema(pool: &SqlitePool) -> DbResult<()> {
    let version = read_user_version(pool)
        .await
        .map_err(DbError::unavailable)?;

    if version == SCHEMA_VERSION {
        debug!(version, "Schema already initialized");
        return Ok(());
    }
    if version > SCHEMA_VERSION {
        return Err(DbError::StorageUnavailable {
            message: format!(
                "database schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            ),
        });
    }

    let mut tx = pool.begin().await.map_err(DbError::unavailable)?;
    sqlx::query(CREATE_ITEMS)
        .execute(&mut *tx)
        .await
        .map_err(DbError::unavailable)?;
    sqlx::query(CREATE_THEME_CONFIG)
        .execute(&mut *tx)
        .await
        .map_err(DbError::unavailable)?;
    let stamp = format!("PRAGMA user_version = {}", SCHEMA_VERSION);
    sqlx::query(&stamp)
        .execute(&mut *tx)
        .await
        .map_err(DbError::unavailable)?;
    tx.commit().await.map_err(DbError::unavailable)?;

    info!(version = SCHEMA_VERSION, "Initialized database schema");
    Ok(())
}

impl Database for SqliteDatabase {
    type Tasks<'a>
        = SqliteTaskRepository<'a>
    where
        Self: 'a;
    type Theme<'a>
        = SqliteThemeRepository<'a>
    where
        Self: 'a;

    async fn migrate(&self) -> DbResult<()> {
        let pool = self.pool().await?;
        bootstrap_schema(&pool).await
    }

    async fn close(&self) {
        if let Some(pool) = self.pool.write().await.take() {
            pool.close().await;
            info!("Database closed");
        }
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository { db: self }
    }

    fn theme(&self) -> Self::Theme<'_> {
        SqliteThemeRepository { db: self }
    }
}

//! SQLite database helpers: connect to an existing database file, or create one and set up the schema.

use std::fs;
use std::io::{Error as IOError, ErrorKind};
use std::path::Path;

use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxSqliteConnector};

use crate::internal::error::Result;

// `include_str!` embeds the schema at compile time, the `.sql` file is not needed at runtime
const SETUP_SQL: &str = include_str!("../../sql/sqlite_init.sql");

/// The path is handed to sqlx as a filename, never spliced into a URL,
/// so `%`, `?` and `#` in directory or file names are taken literally.
async fn connect(db_path: &Path, create: bool) -> Result<DatabaseConnection> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(create)
        .disable_statement_logging();
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Establish a connection to the database at `db_path`, which must already exist.
pub async fn establish_connection(db_path: &Path) -> Result<DatabaseConnection> {
    if !db_path.exists() {
        return Err(IOError::new(
            ErrorKind::NotFound,
            format!("Database file {} does not exist.", db_path.display()),
        )
        .into());
    }

    connect(db_path, false).await
}

/// Run `schema` one statement at a time.
async fn setup_database_sql(conn: &DatabaseConnection, schema: &str) -> Result<()> {
    for statement in schema
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        conn.execute_unprepared(statement).await?;
    }
    Ok(())
}

/// Create a new database file at `db_path` and set up the schema.
/// - Returns an `AlreadyExists` error if the file is already there.
/// - Missing parent directories are created.
/// - If the schema cannot be applied the half-made file is removed again.
pub async fn create_database(db_path: &Path) -> Result<DatabaseConnection> {
    if db_path.exists() {
        return Err(IOError::new(ErrorKind::AlreadyExists, "Database file already exists.").into());
    }

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    create_with_schema(db_path, SETUP_SQL).await
}

async fn create_with_schema(db_path: &Path, schema: &str) -> Result<DatabaseConnection> {
    let conn = match connect(db_path, true).await {
        Ok(conn) => conn,
        Err(e) => {
            let _ = fs::remove_file(db_path);
            return Err(e);
        }
    };
    if let Err(e) = setup_database_sql(&conn, schema).await {
        tracing::error!("failed to set up schema in {}: {e}", db_path.display());
        let _ = conn.close().await;
        let _ = fs::remove_file(db_path);
        return Err(e);
    }
    tracing::info!("created database {}", db_path.display());
    Ok(conn)
}

/// Connect to `db_path`, creating the database first if it does not exist yet.
pub async fn open_or_create(db_path: &Path) -> Result<DatabaseConnection> {
    if db_path.exists() {
        establish_connection(db_path).await
    } else {
        create_database(db_path).await
    }
}

//! Database bootstrap: create the target database and the `books` table if missing.

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Table holding one row per book, keyed by isbn.
pub const BOOKS_TABLE: &str = "books";

/// Create the `books` table if it does not exist. The primary key on `isbn` is what
/// turns concurrent duplicate inserts into `Conflict`.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            isbn TEXT PRIMARY KEY,
            amazon_url TEXT NOT NULL,
            author TEXT NOT NULL,
            language TEXT NOT NULL,
            pages INTEGER NOT NULL,
            publisher TEXT NOT NULL,
            title TEXT NOT NULL,
            year INTEGER NOT NULL
        )
        "#,
        BOOKS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database on the same server, with the same credentials and TLS
/// settings, to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_opts, db_name) = admin_connect_options(database_url)?;
    let Some(db_name) = db_name else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin_opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the server named by `url`, plus the
/// target database name. `None` when the url names no database or names `postgres` itself.
fn admin_connect_options(url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(url).map_err(|_| ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: url.to_string(),
    })?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "postgres")
        .map(String::from);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::errors::Result;

const CREATE_PAYMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS payments (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    payment_uid     TEXT    NOT NULL UNIQUE,
    amount          REAL    NOT NULL,
    currency        TEXT    NOT NULL,
    sender_mobile   TEXT    NOT NULL,
    receiver_mobile TEXT    NOT NULL,
    status          TEXT    NOT NULL DEFAULT 'PENDING'
)
"#;

/// Opens the SQLite pool, creating the database file if it does not exist,
/// and makes sure the payments table is in place.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    tracing::info!("connected to database at {}", database_url);
    Ok(pool)
}

pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_PAYMENTS_TABLE).execute(pool).await?;
    Ok(())
}

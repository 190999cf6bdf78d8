use sqlx::{postgres::PgPoolOptions, PgPool};

const MAX_CONNECTIONS: u32 = 4;

/// Pooled connection to the package database, shared by every request.
#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(database_url: &str) -> DatabaseConnection {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("Failed to connect to the package database: {}", err);
            panic!("Error connecting to database {}", database_url)
        });

    tracing::debug!("Connected to the package database");

    DatabaseConnection { pool }
}

pub async fn migrate(db_conn: &DatabaseConnection) {
    if let Err(err) = sqlx::migrate!().run(&db_conn.pool).await {
        tracing::error!("Failed to apply package migrations: {}", err);
        panic!("Failed to run database migrations");
    }
}

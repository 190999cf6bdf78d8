use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgExecutor;

#[derive(sqlx::FromRow, Clone, Debug, PartialEq)]
pub struct Package {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub package_type: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub downloads: i64,
    pub favorites: i64,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected database error")]
    UnexpectedError,
}

/// Source of package listings. Implementations return at most `limit` rows of
/// `package_type` starting at `offset`, in an order they own.
#[async_trait]
pub trait PackageStore: Send + Sync {
    async fn fetch_package_list_by_type_paged(
        &self,
        package_type: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Package>, Error>;
}

pub async fn find_many_by_type<'e, E: PgExecutor<'e>>(
    e: E,
    package_type: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<Package>, Error> {
    sqlx::query_as::<_, Package>(
        "
        SELECT id, type, name, author, description, downloads, favorites, uploaded_at
        FROM packages
        WHERE type = $1
        ORDER BY id DESC
        LIMIT $2
        OFFSET $3
        ",
    )
    .bind(package_type)
    .bind(limit)
    .bind(offset)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch packages of type {} (offset {}, limit {}): {}",
            package_type,
            offset,
            limit,
            err
        );
        Error::UnexpectedError
    })
}

#[async_trait]
impl PackageStore for DatabaseConnection {
    async fn fetch_package_list_by_type_paged(
        &self,
        package_type: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Package>, Error> {
        find_many_by_type(&self.pool, package_type, offset, limit).await
    }
}

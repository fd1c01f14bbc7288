use std::future::Future;

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use crate::error::{AppError, AppResult};

/// Runs one unit of work on a pooled connection.
///
/// The connection is checked out for the duration of the closure and goes
/// back to the pool when it is dropped, on success and on error alike.
/// Nothing is committed implicitly; a caller that opens a transaction is
/// responsible for finishing it.
pub async fn with_session<T, F, Fut>(pool: &PgPool, f: F) -> AppResult<T>
where
    F: FnOnce(PoolConnection<Postgres>) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let conn = pool.acquire().await.map_err(AppError::Database)?;
    f(conn).await
}

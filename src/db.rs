use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connects to PostgreSQL and applies the embedded migrations. The pool is
/// the only store handle in the process; handlers borrow a connection per
/// query and return it on every exit path.
pub async fn init_db(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

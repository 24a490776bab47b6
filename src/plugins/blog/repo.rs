use sqlx::PgPool;

use crate::plugins::blog::models::BlogDto;

const PROJECTION: &str = "SELECT b.id, b.title, b.content, b.created_at, b.author_id, \
                          a.name AS author_name \
                          FROM blogs b JOIN authors a ON a.id = b.author_id";

pub async fn insert_blog(
    pool: &PgPool,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO blogs (title, content, author_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(content)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

// last_updated is always store-server time, never client-supplied
pub async fn update_blog(
    pool: &PgPool,
    id: i64,
    title: &str,
    content: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE blogs SET title = $1, content = $2, last_updated = now() WHERE id = $3 RETURNING id",
    )
    .bind(title)
    .bind(content)
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn delete_blog(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// All blogs in store-default order; no pagination on this endpoint.
pub async fn find_many(pool: &PgPool) -> Result<Vec<BlogDto>, sqlx::Error> {
    sqlx::query_as::<_, BlogDto>(PROJECTION).fetch_all(pool).await
}

pub async fn find_first(pool: &PgPool, id: i64) -> Result<Option<BlogDto>, sqlx::Error> {
    let sql = format!("{} WHERE b.id = $1", PROJECTION);
    sqlx::query_as::<_, BlogDto>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

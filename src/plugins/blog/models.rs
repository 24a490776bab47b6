use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

#[derive(Serialize, Debug)]
pub struct AuthorRef {
    pub name: String,
}

/// Read projection of a blog row joined to its author. Field names follow the
/// camelCase wire contract of the existing clients.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author: AuthorRef,
}

impl<'r> FromRow<'r, PgRow> for BlogDto {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(BlogDto {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
            author_id: row.try_get("author_id")?,
            author: AuthorRef { name: row.try_get("author_name")? },
        })
    }
}

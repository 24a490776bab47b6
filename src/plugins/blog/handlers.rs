use axum::extract::Path;
use axum::{Extension, Json};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::http_error::AppError;
use crate::plugins::auth::middleware::AuthUser;
use crate::plugins::blog::repo;
use crate::plugins::blog::schema::{CreateBlogInput, UpdateBlogInput};

pub async fn create_blog(
    Extension(pool): Extension<PgPool>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let input = CreateBlogInput::safe_parse(&body).map_err(|_| AppError::InvalidInputs)?;

    // a non-numeric subject cannot own rows; same outcome as a failed insert
    let author_id: i64 = user.user_id.parse().map_err(|_| AppError::PostFailed)?;

    let id = repo::insert_blog(&pool, author_id, &input.title, &input.content)
        .await
        .map_err(|_| AppError::PostFailed)?;

    Ok(Json(json!({ "id": id })))
}

/// Any caller may update any blog by id; there is no ownership check on this
/// route. Store failures (including an unknown id) are not translated and
/// surface as a plain 500.
pub async fn update_blog(
    Extension(pool): Extension<PgPool>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let input = UpdateBlogInput::safe_parse(&body).map_err(|_| AppError::InvalidInputs)?;

    let id = repo::update_blog(&pool, input.id, &input.title, &input.content).await?;

    Ok(Json(json!({ "id": id })))
}

pub async fn delete_blog(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    // a non-numeric id can never match a row
    let id: i64 = id.parse().map_err(|_| AppError::BlogNotFound)?;

    let deleted = repo::delete_blog(&pool, id)
        .await
        .map_err(|_| AppError::BlogNotFound)?;
    if deleted == 0 {
        return Err(AppError::BlogNotFound);
    }

    Ok(Json(json!({ "msg": "Blog deleted succesfully!" })))
}

pub async fn list_blogs(Extension(pool): Extension<PgPool>) -> Result<Json<Value>, AppError> {
    let blogs = repo::find_many(&pool).await?;
    Ok(Json(json!({ "blogs": blogs })))
}

/// A miss is not an error on this route: the body is `{"blog": null}` with
/// status 200.
pub async fn get_blog(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id: i64 = id.parse().map_err(|e| AppError::Internal(format!("bad id: {}", e)))?;

    let blog = repo::find_first(&pool, id).await?;

    Ok(Json(json!({ "blog": blog })))
}

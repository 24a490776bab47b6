use axum::{
    middleware,
    routing::{delete, get, post, put},
    Extension, Router,
};
use sqlx::PgPool;

use crate::kernel::Plugin;
use crate::plugins::auth::middleware::require_auth;
use crate::plugins::blog::handlers::{
    create_blog, delete_blog, get_blog, list_blogs, update_blog,
};

pub struct BlogPlugin {
    pool: PgPool,
}

impl BlogPlugin {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for BlogPlugin {
    async fn router(&self) -> Router {
        // every route on this router sits behind the auth middleware
        Router::new()
            .route("/", post(create_blog))
            .route("/", put(update_blog))
            .route("/bulk", get(list_blogs))
            .route("/:id", get(get_blog))
            .route("/:id", delete(delete_blog))
            .layer(middleware::from_fn(require_auth))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "api/v1/blog"
    }
}

//! Input schemas shared with the web client. `safe_parse` reports failure as
//! a value and never panics on malformed input; unknown body fields are
//! ignored, wrong types are failures.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateBlogInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogInput {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl CreateBlogInput {
    pub fn safe_parse(body: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(body.clone())
    }
}

impl UpdateBlogInput {
    pub fn safe_parse(body: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(body.clone())
    }
}

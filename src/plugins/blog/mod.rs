pub mod handlers;
pub mod models;
pub mod plugin;
pub mod repo;
pub mod schema;

pub use models::*;
pub use plugin::BlogPlugin;

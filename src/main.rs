mod kernel;
mod plugins;
mod http_error;
mod db;

use axum::Router;
use kernel::{build_app, Plugin};
use plugins::blog::BlogPlugin;
use plugins::health::HealthPlugin;
use plugins::metrics::MetricsPlugin;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use dotenvy::dotenv;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // load environment and initialize DB; DATABASE_URL has no default
    dotenv().ok();
    let database_url = env::var("DATABASE_URL")?;
    let pool = db::init_db(&database_url).await?;

    let blog_plugin = BlogPlugin::new(pool.clone());
    let metrics_plugin = MetricsPlugin::new();
    let plugins_vec: Vec<Box<dyn Plugin>> = vec![Box::new(HealthPlugin), Box::new(blog_plugin)];

    let plugin_names: Vec<&'static str> = plugins_vec.iter().map(|p| p.name()).collect();
    tracing::info!("mounting plugins: {:?}", plugin_names);

    // build app and pass the metrics plugin so each plugin router is
    // instrumented with route labels
    let mut app: Router = build_app(&plugins_vec, Some(metrics_plugin.clone())).await;

    // expose metrics at /metrics (not instrumented to avoid double-counting)
    app = app.nest("/metrics", metrics_plugin.router());

    let port: u16 = env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(3000);
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

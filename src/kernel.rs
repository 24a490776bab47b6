use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use async_trait::async_trait;
use tracing::info;

use crate::plugins::metrics::MetricsPlugin;

#[async_trait]
pub trait Plugin: Send + Sync {
    async fn router(&self) -> Router;

    fn name(&self) -> &'static str;
    /// Optional lifecycle hook called when the kernel starts.
    async fn on_start(&self) {}
    /// Optional lifecycle hook called on shutdown.
    async fn on_shutdown(&self) {}
}

async fn track_request(
    metrics: MetricsPlugin,
    route: &'static str,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().as_str().to_owned();
    let started = std::time::Instant::now();
    let res = next.run(req).await;
    let status = res.status().as_u16().to_string();
    metrics
        .request_counter
        .with_label_values(&[&method, route, &status])
        .inc();
    metrics
        .request_duration
        .with_label_values(&[&method, route])
        .observe(started.elapsed().as_secs_f64());
    res
}

/// Builds the application router by mounting each plugin under
/// `/{plugin.name()}`. When a metrics plugin is supplied, every plugin router
/// is instrumented with per-route request counters and latency histograms.
pub async fn build_app(plugins: &Vec<Box<dyn Plugin>>, metrics: Option<MetricsPlugin>) -> Router {
    let mut app = Router::new();

    for plugin in plugins.iter() {
        info!("starting plugin {}", plugin.name());
        plugin.on_start().await;
        let mut router = plugin.router().await;
        if let Some(m) = metrics.clone() {
            let route = plugin.name();
            router = router.layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
                track_request(m.clone(), route, req, next)
            }));
        }
        // mount plugin under its name to namespace routes
        app = app.nest(&format!("/{}", plugin.name()), router);
    }

    app
}

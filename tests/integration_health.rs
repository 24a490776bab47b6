mod common;

use common::spawn_app;
use inkpress_api_kernel::kernel::Plugin;
use inkpress_api_kernel::plugins::health::HealthPlugin;
use inkpress_api_kernel::plugins::metrics::MetricsPlugin;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_ok_and_requests_show_up_in_metrics() -> anyhow::Result<()> {
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(HealthPlugin)];
    let (base, server_handle) = spawn_app(plugins, Some(MetricsPlugin::new())).await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", base)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"].as_str(), Some("ok"));

    let metrics = client.get(format!("{}/metrics", base)).send().await?;
    assert_eq!(metrics.status(), StatusCode::OK);
    let text = metrics.text().await?;
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("http_request_duration_seconds"));

    server_handle.abort();
    let _ = server_handle.await;
    Ok(())
}

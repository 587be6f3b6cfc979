//! Fetch the current metadata of a metric.
//!
//! Shows explicit client construction with the builder instead of
//! environment loading. Reading metadata requires an application key in
//! addition to the API key.
//!
//! Run with:
//!
//! ```text
//! DD_API_KEY=<YOUR_API_KEY> DD_APP_KEY=<YOUR_APP_KEY> cargo run --example view_metadata
//! ```

use metricmeta::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DD_API_KEY").unwrap_or_else(|_| "<YOUR_API_KEY>".to_string());
    let app_key = std::env::var("DD_APP_KEY").unwrap_or_else(|_| "<YOUR_APP_KEY>".to_string());

    let client = MonitorClient::builder()
        .with_credentials(ApiCredentials::new(api_key).with_app_key(app_key))
        .with_timeout(Duration::from_secs(10))
        .build()?;

    let metadata = client.metadata("system.net.bytes_sent").await?;

    println!("system.net.bytes_sent:");
    println!("  type:        {:?}", metadata.metric_type);
    println!("  description: {:?}", metadata.description);
    println!("  short_name:  {:?}", metadata.short_name);
    println!("  unit:        {:?}", metadata.unit);
    println!("  per_unit:    {:?}", metadata.per_unit);
    println!("  integration: {:?}", metadata.integration);

    Ok(())
}

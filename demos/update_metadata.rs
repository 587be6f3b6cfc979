//! Update descriptive metadata for a single metric.
//!
//! Builds a client from `DD_*` environment variables, constructs an update
//! record, and submits it for one named metric.
//!
//! Run with:
//!
//! ```text
//! DD_API_KEY=<YOUR_API_KEY> cargo run --example update_metadata
//! ```

use metricmeta::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Credentials come from DD_API_KEY (and optionally DD_APP_KEY, DD_SITE).
    let client = MonitorClient::from_env()?;

    let updates = MetadataUpdate::new()
        .with_type(MetricType::Gauge)
        .with_description("my custom description")
        .with_short_name("bytes sent")
        .with_unit("byte")
        .with_per_unit("second");

    // Submit updates for metric
    let result = client.update_metadata("system.net.bytes_sent", &updates).await?;

    println!("metadata after update:");
    println!("  type:        {:?}", result.metric_type);
    println!("  description: {:?}", result.description);
    println!("  short_name:  {:?}", result.short_name);
    println!("  unit:        {:?}", result.unit);
    println!("  per_unit:    {:?}", result.per_unit);

    Ok(())
}

//! # metricmeta
//!
//! Typed client for reading and updating metric metadata in a hosted
//! monitoring API.
//!
//! ## Overview
//!
//! Metrics in a monitoring service carry descriptive metadata — their kind
//! (gauge, count, rate), a description, a display name, and units — separate
//! from their time-series values. `metricmeta` exposes that metadata surface
//! as a narrow capability:
//! - A [`MetadataApi`](api::MetadataApi) trait with two operations: read and
//!   update the metadata of a named metric
//! - A concrete [`MonitorClient`](api::MonitorClient) adapter over `reqwest`
//! - Value objects that serialize exactly the fields you set, nothing more
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metricmeta::prelude::*;
//!
//! # async fn example() -> metricmeta::error::Result<()> {
//! let client = MonitorClient::builder()
//!     .with_credentials(ApiCredentials::new("<YOUR_API_KEY>"))
//!     .build()?;
//!
//! let updates = MetadataUpdate::new()
//!     .with_type(MetricType::Gauge)
//!     .with_description("my custom description")
//!     .with_short_name("bytes sent")
//!     .with_unit("byte")
//!     .with_per_unit("second");
//!
//! // Submit updates for metric
//! let result = client.update_metadata("system.net.bytes_sent", &updates).await?;
//! println!("unit is now: {:?}", result.unit);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Narrow seam**: everything goes through [`MetadataApi`](api::MetadataApi),
//!   so tests (or alternative transports) can substitute the client
//! - **Payload fidelity**: unset fields are omitted from the wire payload;
//!   the client performs no local validation or transformation
//! - **No retry policy**: failures surface as-is from the transport; callers
//!   own any backoff strategy
//! - **Environment provisioning**: credentials and site can be loaded from
//!   `DD_*` environment variables via [`MonitorClient::from_env`](api::MonitorClient::from_env)

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::api::{ApiCredentials, MetadataApi, MonitorClient, MonitorClientBuilder};
    pub use crate::error::{MetadataError, Result};
    pub use crate::metrics::{MetadataUpdate, MetricMetadata, MetricType};
}

//! Metric metadata value objects.

mod metadata;

pub use metadata::{MetadataUpdate, MetricMetadata, MetricType};

//! Metadata records for named metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a metric.
///
/// Serialized lowercase on the wire (`"gauge"`, `"count"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// Point-in-time value.
    Gauge,
    /// Monotonic count over an interval.
    Count,
    /// Count normalized per second.
    Rate,
    /// Client-side distribution of values.
    Distribution,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gauge => "gauge",
            Self::Count => "count",
            Self::Rate => "rate",
            Self::Distribution => "distribution",
        };
        write!(f, "{}", name)
    }
}

/// Descriptive metadata of a metric, as returned by the service.
///
/// Every field is optional: the service omits attributes that were never
/// set. `integration` is server-owned and cannot be submitted in updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricMetadata {
    /// Metric kind
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Unit of measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Rate denominator unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit: Option<String>,
    /// StatsD flush interval in seconds, if the metric is statsd-sourced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statsd_interval: Option<i64>,
    /// Name of the integration that emits the metric (read-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

/// A metadata update for a single named metric.
///
/// Only the fields you set are serialized; the service leaves the rest of
/// the metric's metadata untouched. The record is submitted exactly as
/// constructed, with no local validation.
///
/// # Examples
///
/// ```rust
/// use metricmeta::metrics::{MetadataUpdate, MetricType};
///
/// let updates = MetadataUpdate::new()
///     .with_type(MetricType::Gauge)
///     .with_unit("byte")
///     .with_per_unit("second");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataUpdate {
    /// Metric kind
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Unit of measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Rate denominator unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit: Option<String>,
    /// StatsD flush interval in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statsd_interval: Option<i64>,
}

impl MetadataUpdate {
    /// Create an empty update record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric kind.
    pub fn with_type(mut self, metric_type: MetricType) -> Self {
        self.metric_type = Some(metric_type);
        self
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the display name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Set the unit of measurement.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the rate denominator unit.
    pub fn with_per_unit(mut self, per_unit: impl Into<String>) -> Self {
        self.per_unit = Some(per_unit.into());
        self
    }

    /// Set the StatsD flush interval in seconds.
    pub fn with_statsd_interval(mut self, seconds: i64) -> Self {
        self.statsd_interval = Some(seconds);
        self
    }

    /// True if no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

//! Metadata capability trait.

use crate::error::Result;
use crate::metrics::{MetadataUpdate, MetricMetadata};
use async_trait::async_trait;

/// Capability for reading and updating the metadata of named metrics.
///
/// Implement this trait to stand in for the concrete HTTP client (e.g. a
/// recording mock in tests, or an alternative transport).
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Fetch the current metadata for a named metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed, the service
    /// rejects it, or the response cannot be decoded.
    async fn metadata(&self, metric_name: &str) -> Result<MetricMetadata>;

    /// Submit metadata updates for a named metric.
    ///
    /// The update record is submitted exactly as constructed: unset fields
    /// are omitted from the payload and no local validation is applied.
    /// Returns the metadata the service acknowledges after the update.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed, the service
    /// rejects it, or the response cannot be decoded.
    async fn update_metadata(
        &self,
        metric_name: &str,
        updates: &MetadataUpdate,
    ) -> Result<MetricMetadata>;
}

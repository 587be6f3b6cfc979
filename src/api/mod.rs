//! Monitoring API client and capability trait.

mod client;
mod metadata_api;

pub use client::{ApiCredentials, MonitorClient, MonitorClientBuilder};
pub use metadata_api::MetadataApi;

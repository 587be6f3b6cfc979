//! Reqwest-backed client for the monitoring API.

use super::MetadataApi;
use crate::config::ClientSettings;
use crate::error::{MetadataError, Result};
use crate::metrics::{MetadataUpdate, MetricMetadata};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// Default API host.
const DEFAULT_SITE: &str = "https://api.datadoghq.com/";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "DD-API-KEY";

/// Header carrying the application key.
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// Credentials for the monitoring service.
///
/// An API key authenticates every request; some read endpoints additionally
/// require an application key. Credentials only affect request headers —
/// they never alter the payload being submitted.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    app_key: Option<String>,
}

impl ApiCredentials {
    /// Create credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: None,
        }
    }

    /// Attach an application key.
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }
}

/// Client for the metric metadata API.
///
/// A thin adapter over `reqwest`: each operation issues exactly one HTTP
/// request and surfaces whatever the transport or service returns. There is
/// no retry, caching, or local validation.
///
/// # Examples
///
/// ```rust,no_run
/// use metricmeta::prelude::*;
/// use std::time::Duration;
///
/// # async fn example() -> metricmeta::error::Result<()> {
/// let client = MonitorClient::builder()
///     .with_credentials(ApiCredentials::new("<YOUR_API_KEY>"))
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
///
/// let metadata = client.metadata("system.net.bytes_sent").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MonitorClient {
    http: Client,
    base_url: Url,
    credentials: ApiCredentials,
}

impl MonitorClient {
    /// Create a new builder for constructing a client.
    pub fn builder() -> MonitorClientBuilder {
        MonitorClientBuilder::new()
    }

    /// Construct a client from `DD_*` environment variables.
    ///
    /// Recognized variables: `DD_API_KEY` (required), `DD_APP_KEY`,
    /// `DD_SITE`, `DD_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `DD_API_KEY` is unset, the variables cannot be
    /// parsed, or the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self> {
        let settings = ClientSettings::from_env()?;
        let mut builder = MonitorClient::builder()
            .with_credentials(settings.credentials()?)
            .with_timeout(Duration::from_secs(settings.timeout_secs));
        if let Some(site) = settings.site {
            builder = builder.with_site(site);
        }
        builder.build()
    }

    /// Resolve the endpoint URL for a named metric.
    fn metric_url(&self, metric_name: &str) -> Result<Url> {
        self.base_url
            .join(&format!("api/v1/metrics/{}", metric_name))
            .map_err(|e| {
                MetadataError::BuildError(format!(
                    "Invalid metric endpoint for '{}': {}",
                    metric_name, e
                ))
            })
    }

    /// Build the auth headers for a request.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&self.credentials.api_key)
            .map_err(|e| MetadataError::CredentialError(format!("Invalid API key: {}", e)))?;
        headers.insert(API_KEY_HEADER, api_key);
        if let Some(app_key) = &self.credentials.app_key {
            let app_key = HeaderValue::from_str(app_key).map_err(|e| {
                MetadataError::CredentialError(format!("Invalid application key: {}", e))
            })?;
            headers.insert(APP_KEY_HEADER, app_key);
        }
        Ok(headers)
    }

    /// Send a request and decode the metadata response.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<MetricMetadata> {
        let response = request
            .send()
            .await
            .map_err(|e| MetadataError::TransportError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            });
            tracing::warn!(status = status.as_u16(), "metadata request rejected");
            return Err(MetadataError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<MetricMetadata>()
            .await
            .map_err(|e| MetadataError::DecodeError(format!("Failed to parse JSON: {}", e)))
    }
}

#[async_trait]
impl MetadataApi for MonitorClient {
    async fn metadata(&self, metric_name: &str) -> Result<MetricMetadata> {
        let url = self.metric_url(metric_name)?;
        tracing::debug!(%url, "fetching metric metadata");
        let request = self.http.get(url).headers(self.auth_headers()?);
        self.execute(request).await
    }

    async fn update_metadata(
        &self,
        metric_name: &str,
        updates: &MetadataUpdate,
    ) -> Result<MetricMetadata> {
        let url = self.metric_url(metric_name)?;
        tracing::debug!(%url, "submitting metric metadata update");
        let request = self
            .http
            .put(url)
            .headers(self.auth_headers()?)
            .json(updates);
        self.execute(request).await
    }
}

/// Builder for constructing a [`MonitorClient`].
///
/// # Examples
///
/// ```rust,no_run
/// use metricmeta::prelude::*;
/// use std::time::Duration;
///
/// # fn example() -> metricmeta::error::Result<()> {
/// let client = MonitorClient::builder()
///     .with_credentials(ApiCredentials::new("<YOUR_API_KEY>").with_app_key("<YOUR_APP_KEY>"))
///     .with_site("https://api.datadoghq.eu")
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct MonitorClientBuilder {
    site: Option<String>,
    credentials: Option<ApiCredentials>,
    timeout: Duration,
}

impl MonitorClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            site: None,
            credentials: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the credentials to authenticate with.
    pub fn with_credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the base URL of the API host.
    ///
    /// Defaults to `https://api.datadoghq.com`.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credentials are provided
    /// - The site is not a valid URL
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<MonitorClient> {
        let credentials = self.credentials.ok_or_else(|| {
            MetadataError::CredentialError("Credentials are required for MonitorClient".to_string())
        })?;

        // Normalize to a trailing slash so Url::join keeps the full path.
        let mut site = self.site.unwrap_or_else(|| DEFAULT_SITE.to_string());
        if !site.ends_with('/') {
            site.push('/');
        }
        let base_url = Url::parse(&site)
            .map_err(|e| MetadataError::BuildError(format!("Invalid site URL '{}': {}", site, e)))?;

        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| MetadataError::BuildError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(MonitorClient {
            http,
            base_url,
            credentials,
        })
    }
}

impl Default for MonitorClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

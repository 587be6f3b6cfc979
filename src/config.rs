//! Client settings loaded from the environment.

use crate::api::ApiCredentials;
use crate::error::{MetadataError, Result};
use config::{Config, Environment};
use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    10
}

/// Settings for constructing a client, deserializable from `DD_*`
/// environment variables.
///
/// # Examples
///
/// ```rust,no_run
/// use metricmeta::config::ClientSettings;
///
/// // DD_API_KEY=... DD_SITE=https://api.datadoghq.eu
/// # fn example() -> metricmeta::error::Result<()> {
/// let settings = ClientSettings::from_env()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// API key used to authenticate every request (`DD_API_KEY`)
    pub api_key: Option<String>,
    /// Application key some read endpoints require (`DD_APP_KEY`)
    pub app_key: Option<String>,
    /// Base URL of the API host (`DD_SITE`)
    pub site: Option<String>,
    /// Request timeout in seconds (`DD_TIMEOUT_SECS`)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            app_key: None,
            site: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientSettings {
    /// Load settings from `DD_*` environment variables.
    ///
    /// Unrelated `DD_*` variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be read or a variable
    /// fails to parse (e.g. a non-numeric `DD_TIMEOUT_SECS`).
    pub fn from_env() -> Result<Self> {
        let env_source = Environment::with_prefix("DD").try_parsing(true);

        let config = Config::builder()
            .add_source(env_source)
            .build()
            .map_err(|e| {
                MetadataError::BuildError(format!("Failed to load environment variables: {}", e))
            })?;

        config.try_deserialize::<ClientSettings>().map_err(|e| {
            MetadataError::BuildError(format!("Failed to parse environment settings: {}", e))
        })
    }

    /// Turn the key material into request credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is set.
    pub fn credentials(&self) -> Result<ApiCredentials> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            MetadataError::CredentialError("DD_API_KEY is not set".to_string())
        })?;
        let mut credentials = ApiCredentials::new(api_key);
        if let Some(app_key) = &self.app_key {
            credentials = credentials.with_app_key(app_key);
        }
        Ok(credentials)
    }
}

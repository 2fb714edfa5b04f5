//! Layered configuration for admin clients.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables prefixed with `ADMINKIT__`, nested with `__`
//!    (e.g. `ADMINKIT__HTTP__BASE_URL`, `ADMINKIT__MODULES__SAAS__BASE_PATH`)
//!
//! ```yaml
//! http:
//!   base_url: https://admin.example.com
//!   request_timeout: 15s
//!   accept_language: en
//! modules:
//!   saas:
//!     base_path: /api/saas
//! ```

use crate::secret::AccessToken;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ADMINKIT__";

/// Default User-Agent string for admin requests
pub const DEFAULT_USER_AGENT: &str = concat!("adminkit-http/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),

    #[error("invalid configuration for module '{module}': {source}")]
    Module {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Which URL schemes the executor may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportSecurity {
    /// Only `https://` URLs are accepted
    #[default]
    TlsOnly,
    /// Plain `http://` is accepted too; meant for local backends and tests
    AllowInsecureHttp,
}

/// Root certificate source for TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsRoots {
    /// Bundled Mozilla roots
    #[default]
    WebPki,
    /// OS certificate store
    Native,
}

/// Settings of [`HttpRequestExecutor`](crate::HttpRequestExecutor).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpExecutorConfig {
    /// Base URL that relative request paths are resolved against
    pub base_url: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub pool_idle_timeout: Duration,
    pub user_agent: String,
    /// Sent as `Accept-Language` when set
    pub accept_language: Option<String>,
    pub access_token: Option<AccessToken>,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRoots,
    /// Maximum accepted response body size in bytes
    pub max_body_size: usize,
}

impl Default for HttpExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_language: None,
            access_token: None,
            transport: TransportSecurity::TlsOnly,
            tls_roots: TlsRoots::WebPki,
            max_body_size: 10 * 1024 * 1024,
        }
    }
}

/// Root configuration: executor settings plus per-module sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminClientConfig {
    pub http: HttpExecutorConfig,
    pub modules: BTreeMap<String, serde_json::Value>,
}

impl AdminClientConfig {
    /// Load from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `path` does not exist and
    /// `ConfigError::Invalid` if the merged sources do not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path
            && !path.exists()
        {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        let config = Self::from_figment(&Self::figment(path))?;
        tracing::debug!(
            base_url = config.http.base_url.as_deref().unwrap_or("<unset>"),
            modules = config.modules.len(),
            "admin client configuration loaded"
        );
        Ok(config)
    }

    /// Layered provider stack used by [`AdminClientConfig::load`].
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the figment does not match the schema.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Typed configuration of one module; defaults when the section is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Module` if the section does not match `T`.
    pub fn module_config<T>(&self, module: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(module) {
            None => Ok(T::default()),
            Some(section) => {
                serde_json::from_value(section.clone()).map_err(|source| ConfigError::Module {
                    module: module.to_owned(),
                    source,
                })
            }
        }
    }
}

fn deserialize_duration<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    let raw = String::deserialize(d)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

//! Configuration for the saas module.

use serde::Deserialize;

/// Name of the module's section under `modules` in the client configuration.
pub const MODULE_NAME: &str = "saas";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaasConfig {
    /// Path prefix of the saas REST API, relative to the executor's base URL.
    pub base_path: String,
}

impl Default for SaasConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/saas".to_owned(),
        }
    }
}

//! Configuration for the audit logging module.

use serde::Deserialize;

pub const MODULE_NAME: &str = "audit-logging";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditLoggingConfig {
    pub base_path: String,
}

impl Default for AuditLoggingConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/audit-logging".to_owned(),
        }
    }
}

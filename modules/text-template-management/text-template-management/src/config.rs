//! Configuration for the text template management module.

use serde::Deserialize;

pub const MODULE_NAME: &str = "text-template-management";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextTemplateManagementConfig {
    /// Path prefix of the template REST API.
    pub base_path: String,
}

impl Default for TextTemplateManagementConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/text-template-management".to_owned(),
        }
    }
}

//! Template definition and content DTOs.

use adminkit_dto::PagedAndSortedQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinitionDto {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_layout: bool,
    /// Name of the layout template wrapping this one
    #[serde(default)]
    pub layout: Option<String>,
    /// Inline-localized templates have one content for every culture
    #[serde(default)]
    pub is_inline_localized: bool,
    #[serde(default)]
    pub default_culture_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTemplateDefinitionListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
    #[serde(flatten)]
    pub paging: PagedAndSortedQuery,
}

impl GetTemplateDefinitionListInput {
    #[must_use]
    pub fn filtered(filter_text: impl Into<String>) -> Self {
        Self {
            filter_text: Some(filter_text.into()),
            paging: PagedAndSortedQuery::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTemplateContentDto {
    pub name: String,
    #[serde(default)]
    pub culture_name: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Content lookup. The culture name is optional on the wire but facades
/// refuse to fetch without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTemplateContentInput {
    pub template_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture_name: Option<String>,
}

impl GetTemplateContentInput {
    #[must_use]
    pub fn new(template_name: impl Into<String>, culture_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            culture_name: Some(culture_name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateContentInput {
    pub template_name: String,
    pub culture_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreTemplateContentInput {
    pub template_name: String,
    pub culture_name: String,
}

impl From<&UpdateTemplateContentInput> for GetTemplateContentInput {
    fn from(input: &UpdateTemplateContentInput) -> Self {
        Self::new(input.template_name.clone(), input.culture_name.clone())
    }
}

impl From<&RestoreTemplateContentInput> for GetTemplateContentInput {
    fn from(input: &RestoreTemplateContentInput) -> Self {
        Self::new(input.template_name.clone(), input.culture_name.clone())
    }
}

use adminkit_dto::PagedResult;
use adminkit_http::TransportError;
use async_trait::async_trait;

use crate::models::{
    GetTemplateContentInput, GetTemplateDefinitionListInput, RestoreTemplateContentInput,
    TemplateDefinitionDto, TextTemplateContentDto, UpdateTemplateContentInput,
};

/// Template definitions are declared by the backend's code and cannot be
/// created or deleted through the API.
#[async_trait]
pub trait TemplateDefinitionsApi: Send + Sync {
    async fn get_list(
        &self,
        input: &GetTemplateDefinitionListInput,
    ) -> Result<PagedResult<TemplateDefinitionDto>, TransportError>;

    /// Definition by template name.
    async fn get(&self, name: &str) -> Result<TemplateDefinitionDto, TransportError>;
}

#[async_trait]
pub trait TemplateContentsApi: Send + Sync {
    async fn get(
        &self,
        input: &GetTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError>;

    /// Store a culture-specific override and return the stored content.
    async fn update(
        &self,
        input: &UpdateTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError>;

    /// Drop the override so the built-in content applies again.
    async fn restore_to_default(
        &self,
        input: &RestoreTemplateContentInput,
    ) -> Result<(), TransportError>;
}

//! Process-scoped template state.

use adminkit_facade::RefreshPolicy;
use adminkit_http::{RequestExecutor, RestClient};
use std::sync::Arc;
use text_template_management_sdk::{
    TemplateContentsApi, TemplateDefinitionDto, TemplateDefinitionsApi, TextTemplateContentDto,
};

use crate::config::TextTemplateManagementConfig;
use crate::domain::facade::TextTemplatesFacade;
use crate::infra::{TemplateContentRestService, TemplateDefinitionRestService};

/// Template facade shared by every consumer of one session.
#[derive(Debug, Clone)]
pub struct TextTemplateManagementStateService {
    templates: Arc<TextTemplatesFacade>,
}

impl TextTemplateManagementStateService {
    #[must_use]
    pub fn new(
        definitions: Arc<dyn TemplateDefinitionsApi>,
        contents: Arc<dyn TemplateContentsApi>,
    ) -> Self {
        Self {
            templates: Arc::new(TextTemplatesFacade::with_policy(
                definitions,
                contents,
                RefreshPolicy::AfterMutation,
            )),
        }
    }

    #[must_use]
    pub fn from_executor(
        executor: Arc<dyn RequestExecutor>,
        config: &TextTemplateManagementConfig,
    ) -> Self {
        let rest = RestClient::new(executor, config.base_path.clone());
        Self::new(
            Arc::new(TemplateDefinitionRestService::new(rest.clone())),
            Arc::new(TemplateContentRestService::new(rest)),
        )
    }

    #[must_use]
    pub fn templates(&self) -> &TextTemplatesFacade {
        &self.templates
    }

    #[must_use]
    pub fn get_template_definitions(&self) -> Vec<TemplateDefinitionDto> {
        self.templates.state().snapshot.items
    }

    #[must_use]
    pub fn get_total_count(&self) -> u64 {
        self.templates.state().snapshot.total_count
    }

    #[must_use]
    pub fn get_selected_template(&self) -> Option<TemplateDefinitionDto> {
        self.templates.state().snapshot.selected
    }

    #[must_use]
    pub fn get_template_content(&self) -> Option<TextTemplateContentDto> {
        self.templates.state().snapshot.side.template_content
    }

    pub fn reset(&self) {
        self.templates.reset();
    }
}

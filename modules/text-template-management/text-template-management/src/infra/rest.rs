//! REST implementations of the template API traits.

use adminkit_dto::PagedResult;
use adminkit_http::{RequestDescriptor, RestClient, TransportError};
use async_trait::async_trait;
use text_template_management_sdk::{
    GetTemplateContentInput, GetTemplateDefinitionListInput, RestoreTemplateContentInput,
    TemplateContentsApi, TemplateDefinitionDto, TemplateDefinitionsApi, TextTemplateContentDto,
    UpdateTemplateContentInput,
};

const DEFINITIONS: &str = "template-definitions";
const CONTENTS: &str = "template-contents";

#[derive(Debug, Clone)]
pub struct TemplateDefinitionRestService {
    rest: RestClient,
}

impl TemplateDefinitionRestService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TemplateDefinitionsApi for TemplateDefinitionRestService {
    async fn get_list(
        &self,
        input: &GetTemplateDefinitionListInput,
    ) -> Result<PagedResult<TemplateDefinitionDto>, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[DEFINITIONS]), Some(input))
            .await
    }

    async fn get(&self, name: &str) -> Result<TemplateDefinitionDto, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[DEFINITIONS, name]), None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct TemplateContentRestService {
    rest: RestClient,
}

impl TemplateContentRestService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TemplateContentsApi for TemplateContentRestService {
    async fn get(
        &self,
        input: &GetTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[CONTENTS]), Some(input))
            .await
    }

    async fn update(
        &self,
        input: &UpdateTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError> {
        self.rest.put_json(&self.rest.url(&[CONTENTS]), input).await
    }

    async fn restore_to_default(
        &self,
        input: &RestoreTemplateContentInput,
    ) -> Result<(), TransportError> {
        let url = self.rest.url(&[CONTENTS, "restore-to-default"]);
        self.rest
            .execute(RequestDescriptor::put(url).json(input)?)
            .await
    }
}

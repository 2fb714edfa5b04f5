//! In-memory template backend for facade tests.

use adminkit_dto::PagedResult;
use adminkit_http::{StatusCode, TransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeMap, VecDeque};
use text_template_management_sdk::{
    GetTemplateContentInput, GetTemplateDefinitionListInput, RestoreTemplateContentInput,
    TemplateContentsApi, TemplateDefinitionDto, TemplateDefinitionsApi, TextTemplateContentDto,
    UpdateTemplateContentInput,
};

pub fn definition(name: &str) -> TemplateDefinitionDto {
    TemplateDefinitionDto {
        name: name.to_owned(),
        display_name: Some(name.to_owned()),
        is_layout: false,
        layout: None,
        is_inline_localized: false,
        default_culture_name: Some("en".to_owned()),
    }
}

/// Definitions plus built-in content with per-culture overrides.
#[derive(Default)]
pub struct FakeTemplates {
    pub definitions: Vec<TemplateDefinitionDto>,
    pub overrides: Mutex<BTreeMap<(String, String), String>>,
    pub content_lookups: Mutex<Vec<GetTemplateContentInput>>,
    pub failures: Mutex<VecDeque<TransportError>>,
}

impl FakeTemplates {
    pub fn with(names: &[&str]) -> Self {
        Self {
            definitions: names.iter().map(|n| definition(n)).collect(),
            ..Self::default()
        }
    }

    pub fn content_calls(&self) -> usize {
        self.content_lookups.lock().len()
    }

    fn take_failure(&self) -> Result<(), TransportError> {
        match self.failures.lock().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn known(&self, name: &str) -> Result<(), TransportError> {
        if self.definitions.iter().any(|d| d.name == name) {
            Ok(())
        } else {
            Err(TransportError::status(
                StatusCode::NOT_FOUND,
                format!("Undefined template: {name}"),
            ))
        }
    }
}

#[async_trait]
impl TemplateDefinitionsApi for FakeTemplates {
    async fn get_list(
        &self,
        input: &GetTemplateDefinitionListInput,
    ) -> Result<PagedResult<TemplateDefinitionDto>, TransportError> {
        self.take_failure()?;
        let items: Vec<TemplateDefinitionDto> = self
            .definitions
            .iter()
            .filter(|d| input.filter_text.as_deref().is_none_or(|f| d.name.contains(f)))
            .cloned()
            .collect();
        let total = items.len() as u64;
        Ok(PagedResult::new(items, total))
    }

    async fn get(&self, name: &str) -> Result<TemplateDefinitionDto, TransportError> {
        self.take_failure()?;
        self.known(name)?;
        Ok(definition(name))
    }
}

#[async_trait]
impl TemplateContentsApi for FakeTemplates {
    async fn get(
        &self,
        input: &GetTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError> {
        self.content_lookups.lock().push(input.clone());
        self.take_failure()?;
        self.known(&input.template_name)?;
        let culture = input.culture_name.clone().unwrap_or_default();
        let content = self
            .overrides
            .lock()
            .get(&(input.template_name.clone(), culture.clone()))
            .cloned()
            .unwrap_or_else(|| format!("default {}", input.template_name));
        Ok(TextTemplateContentDto {
            name: input.template_name.clone(),
            culture_name: Some(culture),
            content,
        })
    }

    async fn update(
        &self,
        input: &UpdateTemplateContentInput,
    ) -> Result<TextTemplateContentDto, TransportError> {
        self.take_failure()?;
        self.known(&input.template_name)?;
        self.overrides.lock().insert(
            (input.template_name.clone(), input.culture_name.clone()),
            input.content.clone(),
        );
        Ok(TextTemplateContentDto {
            name: input.template_name.clone(),
            culture_name: Some(input.culture_name.clone()),
            content: input.content.clone(),
        })
    }

    async fn restore_to_default(
        &self,
        input: &RestoreTemplateContentInput,
    ) -> Result<(), TransportError> {
        self.take_failure()?;
        self.known(&input.template_name)?;
        self.overrides
            .lock()
            .remove(&(input.template_name.clone(), input.culture_name.clone()));
        Ok(())
    }
}

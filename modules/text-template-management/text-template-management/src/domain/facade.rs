//! Template facade: definition catalogue plus the content being edited.

use adminkit_dto::PagedResult;
use adminkit_facade::{
    FacadeState, FacadeStore, Operation, OperationResult, PreconditionError, RefreshPolicy, Slot,
    Snapshot,
};
use std::sync::Arc;
use text_template_management_sdk::{
    GetTemplateContentInput, GetTemplateDefinitionListInput, RestoreTemplateContentInput,
    TemplateContentsApi, TemplateDefinitionDto, TemplateDefinitionsApi, TextTemplateContentDto,
    UpdateTemplateContentInput,
};
use tokio::sync::watch;

const CONTENT: Slot = Slot::Side("template-content");

const FETCH_DEFINITIONS: Operation = Operation::fetch(
    "fetch_template_definitions",
    Slot::Items,
    "Failed to fetch template definitions",
);
const GET_DEFINITION: Operation = Operation::fetch(
    "get_template_definition",
    Slot::Selected,
    "Failed to fetch template definition",
);
const FETCH_CONTENT: Operation = Operation::fetch(
    "fetch_template_content",
    CONTENT,
    "Failed to fetch template content",
);
const UPDATE_CONTENT: Operation = Operation {
    name: "update_template_content",
    slot: Some(CONTENT),
    fallback: "Failed to update template content",
};
const RESTORE_CONTENT: Operation = Operation::mutation(
    "restore_template_content",
    "Failed to restore template content",
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSideData {
    pub template_content: Option<TextTemplateContentDto>,
}

pub type TextTemplatesState = FacadeState<TemplateDefinitionDto, TemplateSideData>;

/// Template definitions page, the selected definition and its content.
///
/// With [`RefreshPolicy::AfterMutation`] a successful content update or
/// restore re-fetches the content of the same template and culture; the
/// definition list is never refreshed since definitions are read-only.
pub struct TextTemplatesFacade {
    definitions: Arc<dyn TemplateDefinitionsApi>,
    contents: Arc<dyn TemplateContentsApi>,
    store: FacadeStore<TemplateDefinitionDto, TemplateSideData>,
    policy: RefreshPolicy,
}

impl std::fmt::Debug for TextTemplatesFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTemplatesFacade")
            .field("policy", &self.policy)
            .field("state", &self.store.state())
            .finish_non_exhaustive()
    }
}

impl TextTemplatesFacade {
    #[must_use]
    pub fn new(
        definitions: Arc<dyn TemplateDefinitionsApi>,
        contents: Arc<dyn TemplateContentsApi>,
    ) -> Self {
        Self::with_policy(definitions, contents, RefreshPolicy::Manual)
    }

    #[must_use]
    pub fn with_policy(
        definitions: Arc<dyn TemplateDefinitionsApi>,
        contents: Arc<dyn TemplateContentsApi>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            definitions,
            contents,
            store: FacadeStore::new("text-templates"),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> TextTemplatesState {
        self.store.state()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    pub fn select(&self, definition: Option<TemplateDefinitionDto>) {
        self.store.select(definition);
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    pub async fn fetch_template_definitions(
        &self,
        query: Option<GetTemplateDefinitionListInput>,
    ) -> OperationResult<PagedResult<TemplateDefinitionDto>> {
        let query = query.unwrap_or_default();
        self.store
            .run(
                FETCH_DEFINITIONS,
                self.definitions.get_list(&query),
                Snapshot::replace_page,
            )
            .await
    }

    pub async fn get_template_definition(
        &self,
        name: &str,
    ) -> OperationResult<TemplateDefinitionDto> {
        self.store
            .run(GET_DEFINITION, self.definitions.get(name), |snapshot, definition| {
                snapshot.selected = Some(definition.clone());
            })
            .await
    }

    /// Fetch the content of one template in one culture.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] without issuing a request when the
    /// template or culture name is missing.
    pub async fn fetch_template_content(
        &self,
        input: &GetTemplateContentInput,
    ) -> Result<OperationResult<TextTemplateContentDto>, PreconditionError> {
        PreconditionError::require(
            FETCH_CONTENT.name,
            "templateName",
            Some(input.template_name.as_str()),
        )?;
        PreconditionError::require(FETCH_CONTENT.name, "cultureName", input.culture_name.as_deref())?;

        Ok(self
            .store
            .run(FETCH_CONTENT, self.contents.get(input), store_content)
            .await)
    }

    pub async fn update_template_content(
        &self,
        input: &UpdateTemplateContentInput,
    ) -> OperationResult<TextTemplateContentDto> {
        let result = self
            .store
            .run(UPDATE_CONTENT, self.contents.update(input), store_content)
            .await;
        self.refresh_after(result.is_success(), &input.into()).await;
        result
    }

    /// Drop the culture override of a template.
    pub async fn restore_to_default(
        &self,
        input: &RestoreTemplateContentInput,
    ) -> OperationResult<()> {
        let result = self
            .store
            .run(
                RESTORE_CONTENT,
                self.contents.restore_to_default(input),
                |_, ()| {},
            )
            .await;
        self.refresh_after(result.is_success(), &input.into()).await;
        result
    }

    async fn refresh_after(&self, succeeded: bool, lookup: &GetTemplateContentInput) {
        if !succeeded || !self.policy.refreshes_after_mutation() {
            return;
        }
        tracing::debug!(
            facade = self.store.name(),
            template = %lookup.template_name,
            "refreshing template content after mutation"
        );
        if let Err(err) = self.fetch_template_content(lookup).await {
            tracing::warn!(facade = self.store.name(), error = %err, "content refresh skipped");
        }
    }
}

fn store_content(
    snapshot: &mut Snapshot<TemplateDefinitionDto, TemplateSideData>,
    content: &TextTemplateContentDto,
) {
    snapshot.side.template_content = Some(content.clone());
}

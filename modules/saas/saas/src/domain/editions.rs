//! Edition facade.

use adminkit_dto::PagedResult;
use adminkit_facade::{
    FacadeState, FacadeStore, Operation, OperationResult, RefreshPolicy, Slot, Snapshot,
};
use saas_sdk::{
    EditionCreateDto, EditionDto, EditionUpdateDto, EditionUsageStatistics, EditionsApi,
    GetEditionsInput,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

const FETCH_EDITIONS: Operation =
    Operation::fetch("fetch_editions", Slot::Items, "Failed to fetch editions");
const FETCH_ALL_EDITIONS: Operation =
    Operation::fetch("fetch_all_editions", Slot::Items, "Failed to fetch editions");
const GET_EDITION: Operation =
    Operation::fetch("get_edition", Slot::Selected, "Failed to fetch edition");
const CREATE_EDITION: Operation =
    Operation::mutation("create_edition", "Failed to create edition");
const UPDATE_EDITION: Operation =
    Operation::mutation("update_edition", "Failed to update edition");
const DELETE_EDITION: Operation =
    Operation::mutation("delete_edition", "Failed to delete edition");
const FETCH_USAGE_STATISTICS: Operation = Operation::fetch(
    "fetch_usage_statistics",
    Slot::Side("usage-statistics"),
    "Failed to fetch usage statistics",
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionSideData {
    /// Tenant count per edition display name
    pub usage_statistics: BTreeMap<String, i64>,
}

pub type EditionsState = FacadeState<EditionDto, EditionSideData>;

/// Paginated edition view with CRUD and usage statistics.
pub struct EditionsFacade {
    api: Arc<dyn EditionsApi>,
    store: FacadeStore<EditionDto, EditionSideData>,
    policy: RefreshPolicy,
}

impl std::fmt::Debug for EditionsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditionsFacade")
            .field("policy", &self.policy)
            .field("state", &self.store.state())
            .finish_non_exhaustive()
    }
}

impl EditionsFacade {
    #[must_use]
    pub fn new(api: Arc<dyn EditionsApi>) -> Self {
        Self::with_policy(api, RefreshPolicy::Manual)
    }

    #[must_use]
    pub fn with_policy(api: Arc<dyn EditionsApi>, policy: RefreshPolicy) -> Self {
        Self {
            api,
            store: FacadeStore::new("editions"),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> EditionsState {
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

    pub fn select(&self, edition: Option<EditionDto>) {
        self.store.select(edition);
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Fetch one page; `None` sends an empty query.
    pub async fn fetch_editions(
        &self,
        query: Option<GetEditionsInput>,
    ) -> OperationResult<PagedResult<EditionDto>> {
        let query = query.unwrap_or_default();
        self.store
            .run(FETCH_EDITIONS, self.api.get_list(&query), Snapshot::replace_page)
            .await
    }

    /// Fetch every edition as a single page.
    pub async fn fetch_all_editions(&self) -> OperationResult<Vec<EditionDto>> {
        self.store
            .run(
                FETCH_ALL_EDITIONS,
                self.api.get_all(),
                |snapshot, editions: &Vec<EditionDto>| {
                    snapshot.items.clone_from(editions);
                    snapshot.total_count = u64::try_from(editions.len()).unwrap_or(u64::MAX);
                },
            )
            .await
    }

    pub async fn get_edition(&self, id: &str) -> OperationResult<EditionDto> {
        self.store
            .run(GET_EDITION, self.api.get(id), |snapshot, edition| {
                snapshot.selected = Some(edition.clone());
            })
            .await
    }

    pub async fn create_edition(&self, input: &EditionCreateDto) -> OperationResult<EditionDto> {
        let result = self
            .store
            .run(CREATE_EDITION, self.api.create(input), |_, _| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    pub async fn update_edition(
        &self,
        id: &str,
        input: &EditionUpdateDto,
    ) -> OperationResult<EditionDto> {
        let result = self
            .store
            .run(UPDATE_EDITION, self.api.update(id, input), |_, _| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    pub async fn delete_edition(&self, id: &str) -> OperationResult<()> {
        let result = self
            .store
            .run(DELETE_EDITION, self.api.delete(id), |_, ()| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    pub async fn fetch_usage_statistics(&self) -> OperationResult<EditionUsageStatistics> {
        self.store
            .run(
                FETCH_USAGE_STATISTICS,
                self.api.get_usage_statistics(),
                |snapshot, stats: &EditionUsageStatistics| {
                    snapshot.side.usage_statistics.clone_from(&stats.data);
                },
            )
            .await
    }

    async fn refresh_after(&self, succeeded: bool) {
        if succeeded && self.policy.refreshes_after_mutation() {
            tracing::debug!(facade = self.store.name(), "refreshing list after mutation");
            let refreshed = self.fetch_editions(None).await.is_success();
            tracing::debug!(facade = self.store.name(), refreshed, "list refresh finished");
        }
    }
}

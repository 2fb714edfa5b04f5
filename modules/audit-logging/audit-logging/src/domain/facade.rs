//! Audit log facade.

use adminkit_dto::PagedResult;
use adminkit_facade::{FacadeState, FacadeStore, Operation, OperationResult, Slot, Snapshot};
use audit_logging_sdk::{
    AuditLogDto, AuditLogsApi, AverageExecutionDurationPerDayInput,
    AverageExecutionDurationPerDayOutput, EntityChangeDto, EntityChangeFilter,
    EntityChangeWithUsernameDto, ErrorRateFilter, ErrorRateOutput, GetAuditLogListDto,
    GetEntityChangesDto,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

const FETCH_AUDIT_LOGS: Operation =
    Operation::fetch("fetch_audit_logs", Slot::Items, "Failed to fetch audit logs");
const GET_AUDIT_LOG: Operation =
    Operation::fetch("get_audit_log", Slot::Selected, "Failed to fetch audit log");
const FETCH_ERROR_RATE: Operation = Operation::fetch(
    "fetch_error_rate",
    Slot::Side("error-rate"),
    "Failed to fetch error rate",
);
const FETCH_AVERAGE_DURATIONS: Operation = Operation::fetch(
    "fetch_average_execution_durations",
    Slot::Side("average-execution-durations"),
    "Failed to fetch average execution durations",
);
const FETCH_ENTITY_CHANGES: Operation = Operation::fetch(
    "fetch_entity_changes",
    Slot::Side("entity-changes"),
    "Failed to fetch entity changes",
);
const GET_ENTITY_CHANGE: Operation = Operation::fetch(
    "get_entity_change",
    Slot::Side("selected-entity-change"),
    "Failed to fetch entity change",
);
const GET_ENTITY_CHANGE_WITH_USERNAME: Operation = Operation::fetch(
    "get_entity_change_with_username",
    Slot::Side("selected-entity-change-with-username"),
    "Failed to fetch entity change",
);
const FETCH_ENTITY_HISTORY: Operation = Operation::fetch(
    "fetch_entity_changes_with_username",
    Slot::Side("entity-change-history"),
    "Failed to fetch entity change history",
);

/// Statistics and entity changes held next to the audit log page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogSideData {
    /// Failed request count per day
    pub error_rate: BTreeMap<String, i64>,
    /// Average request duration in milliseconds per day
    pub average_execution_durations: BTreeMap<String, f64>,
    pub entity_changes: PagedResult<EntityChangeDto>,
    pub selected_entity_change: Option<EntityChangeDto>,
    pub selected_entity_change_with_username: Option<EntityChangeWithUsernameDto>,
    /// Change history of one entity, oldest first as returned by the backend
    pub entity_change_history: Vec<EntityChangeWithUsernameDto>,
}

pub type AuditLogsState = FacadeState<AuditLogDto, AuditLogSideData>;

/// Read-only view over the audit trail.
///
/// The trail cannot be mutated, so the facade has no refresh policy.
pub struct AuditLogsFacade {
    api: Arc<dyn AuditLogsApi>,
    store: FacadeStore<AuditLogDto, AuditLogSideData>,
}

impl std::fmt::Debug for AuditLogsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogsFacade")
            .field("state", &self.store.state())
            .finish_non_exhaustive()
    }
}

impl AuditLogsFacade {
    #[must_use]
    pub fn new(api: Arc<dyn AuditLogsApi>) -> Self {
        Self {
            api,
            store: FacadeStore::new("audit-logs"),
        }
    }

    #[must_use]
    pub fn state(&self) -> AuditLogsState {
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

    pub fn select(&self, audit_log: Option<AuditLogDto>) {
        self.store.select(audit_log);
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    pub async fn fetch_audit_logs(
        &self,
        query: Option<GetAuditLogListDto>,
    ) -> OperationResult<PagedResult<AuditLogDto>> {
        let query = query.unwrap_or_default();
        self.store
            .run(FETCH_AUDIT_LOGS, self.api.get_list(&query), Snapshot::replace_page)
            .await
    }

    pub async fn get_audit_log(&self, id: &str) -> OperationResult<AuditLogDto> {
        self.store
            .run(GET_AUDIT_LOG, self.api.get(id), |snapshot, log| {
                snapshot.selected = Some(log.clone());
            })
            .await
    }

    pub async fn fetch_error_rate(
        &self,
        filter: &ErrorRateFilter,
    ) -> OperationResult<ErrorRateOutput> {
        self.store
            .run(
                FETCH_ERROR_RATE,
                self.api.get_error_rate(filter),
                |snapshot, output: &ErrorRateOutput| {
                    snapshot.side.error_rate.clone_from(&output.data);
                },
            )
            .await
    }

    pub async fn fetch_average_execution_durations(
        &self,
        input: &AverageExecutionDurationPerDayInput,
    ) -> OperationResult<AverageExecutionDurationPerDayOutput> {
        self.store
            .run(
                FETCH_AVERAGE_DURATIONS,
                self.api.get_average_execution_duration_per_day(input),
                |snapshot, output: &AverageExecutionDurationPerDayOutput| {
                    snapshot
                        .side
                        .average_execution_durations
                        .clone_from(&output.data);
                },
            )
            .await
    }

    /// Fetch a page of entity changes; `None` sends an empty query.
    pub async fn fetch_entity_changes(
        &self,
        query: Option<GetEntityChangesDto>,
    ) -> OperationResult<PagedResult<EntityChangeDto>> {
        let query = query.unwrap_or_default();
        self.store
            .run(
                FETCH_ENTITY_CHANGES,
                self.api.get_entity_changes(&query),
                |snapshot, page: &PagedResult<EntityChangeDto>| {
                    snapshot.side.entity_changes.clone_from(page);
                },
            )
            .await
    }

    pub async fn get_entity_change(&self, id: &str) -> OperationResult<EntityChangeDto> {
        self.store
            .run(
                GET_ENTITY_CHANGE,
                self.api.get_entity_change(id),
                |snapshot, change: &EntityChangeDto| {
                    snapshot.side.selected_entity_change = Some(change.clone());
                },
            )
            .await
    }

    pub async fn get_entity_change_with_username(
        &self,
        id: &str,
    ) -> OperationResult<EntityChangeWithUsernameDto> {
        self.store
            .run(
                GET_ENTITY_CHANGE_WITH_USERNAME,
                self.api.get_entity_change_with_username(id),
                |snapshot, change: &EntityChangeWithUsernameDto| {
                    snapshot.side.selected_entity_change_with_username = Some(change.clone());
                },
            )
            .await
    }

    pub async fn fetch_entity_changes_with_username(
        &self,
        filter: &EntityChangeFilter,
    ) -> OperationResult<Vec<EntityChangeWithUsernameDto>> {
        self.store
            .run(
                FETCH_ENTITY_HISTORY,
                self.api.get_entity_changes_with_username(filter),
                |snapshot, history: &Vec<EntityChangeWithUsernameDto>| {
                    snapshot.side.entity_change_history.clone_from(history);
                },
            )
            .await
    }
}

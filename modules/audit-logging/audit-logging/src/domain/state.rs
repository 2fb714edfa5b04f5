//! Process-scoped audit log state.

use adminkit_dto::PagedResult;
use adminkit_http::{RequestExecutor, RestClient};
use audit_logging_sdk::{AuditLogDto, AuditLogsApi, EntityChangeDto};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::AuditLoggingConfig;
use crate::domain::facade::AuditLogsFacade;
use crate::infra::AuditLogRestService;

/// Audit log facade shared by every consumer of one session.
#[derive(Debug, Clone)]
pub struct AuditLoggingStateService {
    audit_logs: Arc<AuditLogsFacade>,
}

impl AuditLoggingStateService {
    #[must_use]
    pub fn new(api: Arc<dyn AuditLogsApi>) -> Self {
        Self {
            audit_logs: Arc::new(AuditLogsFacade::new(api)),
        }
    }

    #[must_use]
    pub fn from_executor(executor: Arc<dyn RequestExecutor>, config: &AuditLoggingConfig) -> Self {
        Self::new(Arc::new(AuditLogRestService::new(RestClient::new(
            executor,
            config.base_path.clone(),
        ))))
    }

    #[must_use]
    pub fn audit_logs(&self) -> &AuditLogsFacade {
        &self.audit_logs
    }

    #[must_use]
    pub fn get_audit_logs(&self) -> Vec<AuditLogDto> {
        self.audit_logs.state().snapshot.items
    }

    #[must_use]
    pub fn get_total_count(&self) -> u64 {
        self.audit_logs.state().snapshot.total_count
    }

    #[must_use]
    pub fn get_error_rate(&self) -> BTreeMap<String, i64> {
        self.audit_logs.state().snapshot.side.error_rate
    }

    #[must_use]
    pub fn get_average_execution_durations(&self) -> BTreeMap<String, f64> {
        self.audit_logs
            .state()
            .snapshot
            .side
            .average_execution_durations
    }

    #[must_use]
    pub fn get_entity_changes(&self) -> PagedResult<EntityChangeDto> {
        self.audit_logs.state().snapshot.side.entity_changes
    }

    pub fn reset(&self) {
        self.audit_logs.reset();
    }
}

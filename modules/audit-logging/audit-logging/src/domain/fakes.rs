//! Canned audit trail for facade tests.

use adminkit_dto::PagedResult;
use adminkit_http::{StatusCode, TransportError};
use async_trait::async_trait;
use audit_logging_sdk::{
    AuditLogDto, AuditLogsApi, AverageExecutionDurationPerDayInput,
    AverageExecutionDurationPerDayOutput, EntityChangeDto, EntityChangeFilter, EntityChangeType,
    EntityChangeWithUsernameDto, ErrorRateFilter, ErrorRateOutput, GetAuditLogListDto,
    GetEntityChangesDto,
};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;

pub fn audit_log(id: &str, method: &str, status: u16) -> AuditLogDto {
    serde_json::from_value(json!({
        "id": id,
        "httpMethod": method,
        "httpStatusCode": status,
        "url": format!("/api/items/{id}"),
        "executionDuration": 12
    }))
    .unwrap()
}

pub fn entity_change(id: &str, entity_id: &str, kind: EntityChangeType) -> EntityChangeDto {
    EntityChangeDto {
        id: id.to_owned(),
        audit_log_id: Some("log-1".to_owned()),
        tenant_id: None,
        change_time: Some("2026-10-01T10:00:00Z".to_owned()),
        change_type: kind,
        entity_id: Some(entity_id.to_owned()),
        entity_type_full_name: Some("Acme.Book".to_owned()),
        property_changes: Vec::new(),
    }
}

#[derive(Default)]
pub struct FakeAuditTrail {
    pub logs: Mutex<Vec<AuditLogDto>>,
    pub changes: Vec<EntityChangeDto>,
    pub list_queries: Mutex<Vec<GetAuditLogListDto>>,
    pub failures: Mutex<VecDeque<TransportError>>,
    /// When set, error-rate calls wait for a notification
    pub error_rate_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeAuditTrail {
    pub fn seeded() -> Arc<Self> {
        let trail = Self {
            changes: vec![
                entity_change("ec-1", "42", EntityChangeType::Created),
                entity_change("ec-2", "42", EntityChangeType::Updated),
                entity_change("ec-3", "7", EntityChangeType::Deleted),
            ],
            ..Self::default()
        };
        *trail.logs.lock() = vec![
            audit_log("log-1", "POST", 200),
            audit_log("log-2", "GET", 500),
            audit_log("log-3", "GET", 200),
        ];
        Arc::new(trail)
    }

    fn take_failure(&self) -> Result<(), TransportError> {
        match self.failures.lock().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn change(&self, id: &str) -> Result<EntityChangeDto, TransportError> {
        self.changes
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| TransportError::status(StatusCode::NOT_FOUND, "Entity change not found"))
    }
}

#[async_trait]
impl AuditLogsApi for FakeAuditTrail {
    async fn get_list(
        &self,
        input: &GetAuditLogListDto,
    ) -> Result<PagedResult<AuditLogDto>, TransportError> {
        self.list_queries.lock().push(input.clone());
        self.take_failure()?;
        let logs: Vec<AuditLogDto> = self
            .logs
            .lock()
            .iter()
            .filter(|l| {
                input
                    .http_method
                    .as_deref()
                    .is_none_or(|m| l.http_method.as_deref() == Some(m))
            })
            .filter(|l| {
                input
                    .http_status_code
                    .is_none_or(|s| l.http_status_code == Some(s))
            })
            .cloned()
            .collect();
        let total = logs.len() as u64;
        Ok(PagedResult::new(logs, total))
    }

    async fn get(&self, id: &str) -> Result<AuditLogDto, TransportError> {
        self.take_failure()?;
        self.logs
            .lock()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| TransportError::status(StatusCode::NOT_FOUND, "Audit log not found"))
    }

    async fn get_error_rate(
        &self,
        _filter: &ErrorRateFilter,
    ) -> Result<ErrorRateOutput, TransportError> {
        let gate = self.error_rate_gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.take_failure()?;
        let failed = self
            .logs
            .lock()
            .iter()
            .filter(|l| l.http_status_code.is_some_and(|s| s >= 400))
            .count();
        let mut output = ErrorRateOutput::default();
        output
            .data
            .insert("2026-10-01".to_owned(), i64::try_from(failed).unwrap());
        Ok(output)
    }

    async fn get_average_execution_duration_per_day(
        &self,
        _input: &AverageExecutionDurationPerDayInput,
    ) -> Result<AverageExecutionDurationPerDayOutput, TransportError> {
        self.take_failure()?;
        let mut output = AverageExecutionDurationPerDayOutput::default();
        output.data.insert("2026-10-01".to_owned(), 12.5);
        Ok(output)
    }

    async fn get_entity_changes(
        &self,
        input: &GetEntityChangesDto,
    ) -> Result<PagedResult<EntityChangeDto>, TransportError> {
        self.take_failure()?;
        let changes: Vec<EntityChangeDto> = self
            .changes
            .iter()
            .filter(|c| input.entity_change_type.is_none_or(|t| c.change_type == t))
            .cloned()
            .collect();
        let total = changes.len() as u64;
        Ok(PagedResult::new(changes, total))
    }

    async fn get_entity_change(&self, id: &str) -> Result<EntityChangeDto, TransportError> {
        self.take_failure()?;
        self.change(id)
    }

    async fn get_entity_change_with_username(
        &self,
        id: &str,
    ) -> Result<EntityChangeWithUsernameDto, TransportError> {
        self.take_failure()?;
        Ok(EntityChangeWithUsernameDto {
            entity_change: self.change(id)?,
            user_name: Some("admin".to_owned()),
        })
    }

    async fn get_entity_changes_with_username(
        &self,
        filter: &EntityChangeFilter,
    ) -> Result<Vec<EntityChangeWithUsernameDto>, TransportError> {
        self.take_failure()?;
        Ok(self
            .changes
            .iter()
            .filter(|c| c.entity_id.as_deref() == Some(filter.entity_id.as_str()))
            .map(|c| EntityChangeWithUsernameDto {
                entity_change: c.clone(),
                user_name: Some("admin".to_owned()),
            })
            .collect())
    }
}

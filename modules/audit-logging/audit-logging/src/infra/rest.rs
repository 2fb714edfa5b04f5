//! REST implementation of `AuditLogsApi` over `{base}/audit-logs`.

use adminkit_dto::PagedResult;
use adminkit_http::{RestClient, TransportError};
use async_trait::async_trait;
use audit_logging_sdk::{
    AuditLogDto, AuditLogsApi, AverageExecutionDurationPerDayInput,
    AverageExecutionDurationPerDayOutput, EntityChangeDto, EntityChangeFilter,
    EntityChangeWithUsernameDto, ErrorRateFilter, ErrorRateOutput, GetAuditLogListDto,
    GetEntityChangesDto,
};

const AUDIT_LOGS: &str = "audit-logs";

#[derive(Debug, Clone)]
pub struct AuditLogRestService {
    rest: RestClient,
}

impl AuditLogRestService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn url(&self, tail: &[&str]) -> String {
        let mut segments = Vec::with_capacity(tail.len() + 1);
        segments.push(AUDIT_LOGS);
        segments.extend_from_slice(tail);
        self.rest.url(&segments)
    }
}

#[async_trait]
impl AuditLogsApi for AuditLogRestService {
    async fn get_list(
        &self,
        input: &GetAuditLogListDto,
    ) -> Result<PagedResult<AuditLogDto>, TransportError> {
        self.rest.get_json(&self.url(&[]), Some(input)).await
    }

    async fn get(&self, id: &str) -> Result<AuditLogDto, TransportError> {
        self.rest.get_json(&self.url(&[id]), None::<&()>).await
    }

    async fn get_error_rate(
        &self,
        filter: &ErrorRateFilter,
    ) -> Result<ErrorRateOutput, TransportError> {
        self.rest
            .get_json(&self.url(&["statistics", "errors"]), Some(filter))
            .await
    }

    async fn get_average_execution_duration_per_day(
        &self,
        input: &AverageExecutionDurationPerDayInput,
    ) -> Result<AverageExecutionDurationPerDayOutput, TransportError> {
        self.rest
            .get_json(
                &self.url(&["statistics", "average-execution-duration-per-day"]),
                Some(input),
            )
            .await
    }

    async fn get_entity_changes(
        &self,
        input: &GetEntityChangesDto,
    ) -> Result<PagedResult<EntityChangeDto>, TransportError> {
        self.rest
            .get_json(&self.url(&["entity-changes"]), Some(input))
            .await
    }

    async fn get_entity_change(&self, id: &str) -> Result<EntityChangeDto, TransportError> {
        self.rest
            .get_json(&self.url(&["entity-changes", id]), None::<&()>)
            .await
    }

    async fn get_entity_change_with_username(
        &self,
        id: &str,
    ) -> Result<EntityChangeWithUsernameDto, TransportError> {
        self.rest
            .get_json(&self.url(&["entity-change-with-username", id]), None::<&()>)
            .await
    }

    async fn get_entity_changes_with_username(
        &self,
        filter: &EntityChangeFilter,
    ) -> Result<Vec<EntityChangeWithUsernameDto>, TransportError> {
        self.rest
            .get_json(&self.url(&["entity-changes-with-username"]), Some(filter))
            .await
    }
}

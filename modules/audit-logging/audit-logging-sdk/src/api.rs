use adminkit_dto::PagedResult;
use adminkit_http::TransportError;
use async_trait::async_trait;

use crate::models::{
    AuditLogDto, AverageExecutionDurationPerDayInput, AverageExecutionDurationPerDayOutput,
    EntityChangeDto, EntityChangeFilter, EntityChangeWithUsernameDto, ErrorRateFilter,
    ErrorRateOutput, GetAuditLogListDto, GetEntityChangesDto,
};

/// Read access to audit logs and entity changes.
#[async_trait]
pub trait AuditLogsApi: Send + Sync {
    async fn get_list(
        &self,
        input: &GetAuditLogListDto,
    ) -> Result<PagedResult<AuditLogDto>, TransportError>;

    async fn get(&self, id: &str) -> Result<AuditLogDto, TransportError>;

    /// Failed request count per day within the filter's range.
    async fn get_error_rate(
        &self,
        filter: &ErrorRateFilter,
    ) -> Result<ErrorRateOutput, TransportError>;

    /// Average request duration in milliseconds per day.
    async fn get_average_execution_duration_per_day(
        &self,
        input: &AverageExecutionDurationPerDayInput,
    ) -> Result<AverageExecutionDurationPerDayOutput, TransportError>;

    async fn get_entity_changes(
        &self,
        input: &GetEntityChangesDto,
    ) -> Result<PagedResult<EntityChangeDto>, TransportError>;

    async fn get_entity_change(&self, id: &str) -> Result<EntityChangeDto, TransportError>;

    /// Entity change together with the name of the user who made it.
    async fn get_entity_change_with_username(
        &self,
        id: &str,
    ) -> Result<EntityChangeWithUsernameDto, TransportError>;

    /// Full change history of one entity.
    async fn get_entity_changes_with_username(
        &self,
        filter: &EntityChangeFilter,
    ) -> Result<Vec<EntityChangeWithUsernameDto>, TransportError>;
}

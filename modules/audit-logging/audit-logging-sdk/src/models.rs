//! Audit log and entity change DTOs.

use adminkit_dto::{EntityId, PagedAndSortedQuery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogActionDto {
    pub id: EntityId,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub method_name: Option<String>,
    /// Serialized call arguments
    #[serde(default)]
    pub parameters: Option<String>,
    #[serde(default)]
    pub execution_time: Option<String>,
    #[serde(default)]
    pub execution_duration: i64,
}

/// One audited HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogDto {
    pub id: EntityId,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<EntityId>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub execution_time: Option<String>,
    /// Milliseconds
    #[serde(default)]
    pub execution_duration: i64,
    #[serde(default)]
    pub client_ip_address: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub browser_info: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub exceptions: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub http_status_code: Option<u16>,
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub entity_changes: Vec<EntityChangeDto>,
    #[serde(default)]
    pub actions: Vec<AuditLogActionDto>,
}

/// Kind of change recorded for an entity; numeric on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum EntityChangeType {
    Created,
    Updated,
    Deleted,
}

impl From<EntityChangeType> for u8 {
    fn from(kind: EntityChangeType) -> Self {
        match kind {
            EntityChangeType::Created => 0,
            EntityChangeType::Updated => 1,
            EntityChangeType::Deleted => 2,
        }
    }
}

impl TryFrom<u8> for EntityChangeType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Created),
            1 => Ok(Self::Updated),
            2 => Ok(Self::Deleted),
            other => Err(format!("unknown entity change type {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPropertyChangeDto {
    pub id: EntityId,
    #[serde(default)]
    pub entity_change_id: Option<EntityId>,
    pub property_name: String,
    #[serde(default)]
    pub property_type_full_name: Option<String>,
    #[serde(default)]
    pub original_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityChangeDto {
    pub id: EntityId,
    #[serde(default)]
    pub audit_log_id: Option<EntityId>,
    #[serde(default)]
    pub tenant_id: Option<EntityId>,
    #[serde(default)]
    pub change_time: Option<String>,
    pub change_type: EntityChangeType,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub entity_type_full_name: Option<String>,
    #[serde(default)]
    pub property_changes: Vec<EntityPropertyChangeDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityChangeWithUsernameDto {
    pub entity_change: EntityChangeDto,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Audit log list filters. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuditLogListDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_execution_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_execution_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_exception: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(flatten)]
    pub paging: PagedAndSortedQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEntityChangesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_change_type: Option<EntityChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub paging: PagedAndSortedQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityChangeFilter {
    pub entity_id: String,
    pub entity_type_full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRateOutput {
    #[serde(default)]
    pub data: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageExecutionDurationPerDayInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageExecutionDurationPerDayOutput {
    #[serde(default)]
    pub data: BTreeMap<String, f64>,
}

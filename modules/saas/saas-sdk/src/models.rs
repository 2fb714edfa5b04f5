//! Tenant and edition DTOs.
//!
//! Field names follow the backend's camelCase JSON. Identifiers and
//! timestamps are kept as the opaque strings the backend sends.

use adminkit_dto::{EntityId, PagedAndSortedQuery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a tenant may sign in, and until when.
///
/// Sent over the wire as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActivationState {
    #[default]
    Active,
    /// Active until `activationEndDate`
    ActiveWithLimitedTime,
    Passive,
}

impl From<ActivationState> for u8 {
    fn from(state: ActivationState) -> Self {
        match state {
            ActivationState::Active => 0,
            ActivationState::ActiveWithLimitedTime => 1,
            ActivationState::Passive => 2,
        }
    }
}

impl TryFrom<u8> for ActivationState {
    type Error = UnknownActivationState;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Active),
            1 => Ok(Self::ActiveWithLimitedTime),
            2 => Ok(Self::Passive),
            other => Err(UnknownActivationState(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownActivationState(pub u8);

impl fmt::Display for UnknownActivationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activation state {}", self.0)
    }
}

impl std::error::Error for UnknownActivationState {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub edition_id: Option<EntityId>,
    #[serde(default)]
    pub edition_name: Option<String>,
    #[serde(default)]
    pub edition_end_date_utc: Option<String>,
    #[serde(default)]
    pub activation_state: ActivationState,
    #[serde(default)]
    pub activation_end_date: Option<String>,
    #[serde(default)]
    pub concurrency_stamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasTenantDatabaseConnectionStringDto {
    pub database_name: String,
    pub connection_string: String,
}

/// Connection strings supplied when a tenant gets its own database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasTenantConnectionStringsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<SaasTenantDatabaseConnectionStringDto>,
}

/// Input of tenant creation; the admin email and password are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasTenantCreateDto {
    pub name: String,
    pub admin_email_address: String,
    pub admin_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_id: Option<EntityId>,
    #[serde(default)]
    pub activation_state: ActivationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_end_date_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_strings: Option<SaasTenantConnectionStringsDto>,
}

impl SaasTenantCreateDto {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        admin_email_address: impl Into<String>,
        admin_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            admin_email_address: admin_email_address.into(),
            admin_password: admin_password.into(),
            edition_id: None,
            activation_state: ActivationState::Active,
            activation_end_date: None,
            edition_end_date_utc: None,
            connection_strings: None,
        }
    }
}

/// Input of tenant update; the id travels in the path, not in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasTenantUpdateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_id: Option<EntityId>,
    #[serde(default)]
    pub activation_state: ActivationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_end_date_utc: Option<String>,
    pub concurrency_stamp: String,
}

impl SaasTenantUpdateDto {
    /// Update input prefilled from the tenant as last fetched.
    #[must_use]
    pub fn from_tenant(tenant: &TenantDto) -> Self {
        Self {
            name: tenant.name.clone(),
            edition_id: tenant.edition_id.clone(),
            activation_state: tenant.activation_state,
            activation_end_date: tenant.activation_end_date.clone(),
            edition_end_date_utc: tenant.edition_end_date_utc.clone(),
            concurrency_stamp: tenant.concurrency_stamp.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasTenantSetPasswordDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTenantsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_edition_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_state: Option<ActivationState>,
    #[serde(flatten)]
    pub paging: PagedAndSortedQuery,
}

impl GetTenantsInput {
    #[must_use]
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionDto {
    pub id: EntityId,
    pub display_name: String,
    #[serde(default)]
    pub plan_id: Option<EntityId>,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub tenant_count: Option<u64>,
    #[serde(default)]
    pub concurrency_stamp: Option<String>,
}

/// Input of edition creation; only the display name is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionCreateDto {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<EntityId>,
}

impl EditionCreateDto {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            plan_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionUpdateDto {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<EntityId>,
    pub concurrency_stamp: String,
}

impl EditionUpdateDto {
    #[must_use]
    pub fn from_edition(edition: &EditionDto) -> Self {
        Self {
            display_name: edition.display_name.clone(),
            plan_id: edition.plan_id.clone(),
            concurrency_stamp: edition.concurrency_stamp.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEditionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(flatten)]
    pub paging: PagedAndSortedQuery,
}

impl GetEditionsInput {
    #[must_use]
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            paging: PagedAndSortedQuery::default(),
        }
    }
}

/// Edition id and display name, as offered when assigning a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionLookupDto {
    pub id: EntityId,
    pub display_name: String,
}

/// Number of tenants per edition display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionUsageStatistics {
    #[serde(default)]
    pub data: BTreeMap<String, i64>,
}

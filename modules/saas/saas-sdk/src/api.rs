//! API traits of the `saas` module.
//!
//! Implementations are stateless translations onto REST calls. Every method
//! fails with the transport's [`TransportError`]; a missing entity surfaces
//! as a 404 status (`TransportError::is_not_found`).

use adminkit_dto::PagedResult;
use adminkit_http::TransportError;
use async_trait::async_trait;

use crate::models::{
    EditionCreateDto, EditionDto, EditionLookupDto, EditionUpdateDto, EditionUsageStatistics,
    GetEditionsInput, GetTenantsInput, SaasTenantCreateDto, SaasTenantSetPasswordDto,
    SaasTenantUpdateDto, TenantDto,
};

/// Tenant management.
#[async_trait]
pub trait TenantsApi: Send + Sync {
    /// Page of tenants matching `input`.
    async fn get_list(&self, input: &GetTenantsInput)
    -> Result<PagedResult<TenantDto>, TransportError>;

    async fn get(&self, id: &str) -> Result<TenantDto, TransportError>;

    /// Create a tenant together with its admin user.
    async fn create(&self, input: &SaasTenantCreateDto) -> Result<TenantDto, TransportError>;

    /// Update a tenant; `input` must carry the current concurrency stamp.
    async fn update(
        &self,
        id: &str,
        input: &SaasTenantUpdateDto,
    ) -> Result<TenantDto, TransportError>;

    async fn delete(&self, id: &str) -> Result<(), TransportError>;

    /// Default connection string of the tenant; empty when it uses the shared database.
    async fn get_default_connection_string(&self, id: &str) -> Result<String, TransportError>;

    async fn update_default_connection_string(
        &self,
        id: &str,
        connection_string: &str,
    ) -> Result<(), TransportError>;

    async fn delete_default_connection_string(&self, id: &str) -> Result<(), TransportError>;

    /// Editions a tenant can be assigned to.
    async fn get_edition_lookup(&self) -> Result<Vec<EditionLookupDto>, TransportError>;

    /// Reset the password of a user in the tenant.
    async fn set_password(
        &self,
        id: &str,
        input: &SaasTenantSetPasswordDto,
    ) -> Result<(), TransportError>;
}

/// Edition management.
#[async_trait]
pub trait EditionsApi: Send + Sync {
    async fn get_list(
        &self,
        input: &GetEditionsInput,
    ) -> Result<PagedResult<EditionDto>, TransportError>;

    /// Every edition, unpaged.
    async fn get_all(&self) -> Result<Vec<EditionDto>, TransportError>;

    async fn get(&self, id: &str) -> Result<EditionDto, TransportError>;

    async fn create(&self, input: &EditionCreateDto) -> Result<EditionDto, TransportError>;

    async fn update(
        &self,
        id: &str,
        input: &EditionUpdateDto,
    ) -> Result<EditionDto, TransportError>;

    async fn delete(&self, id: &str) -> Result<(), TransportError>;

    /// Tenant count per edition display name.
    async fn get_usage_statistics(&self) -> Result<EditionUsageStatistics, TransportError>;
}

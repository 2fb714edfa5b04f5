//! REST implementations of the saas API traits.

use adminkit_dto::PagedResult;
use adminkit_http::{RequestDescriptor, RestClient, TransportError};
use async_trait::async_trait;
use saas_sdk::{
    EditionCreateDto, EditionDto, EditionLookupDto, EditionUpdateDto, EditionUsageStatistics,
    EditionsApi, GetEditionsInput, GetTenantsInput, SaasTenantCreateDto, SaasTenantSetPasswordDto,
    SaasTenantUpdateDto, TenantDto, TenantsApi,
};

const TENANTS: &str = "tenants";
const EDITIONS: &str = "editions";
const DEFAULT_CONNECTION_STRING: &str = "default-connection-string";

/// `TenantsApi` over `{base}/tenants`.
#[derive(Debug, Clone)]
pub struct TenantRestService {
    rest: RestClient,
}

impl TenantRestService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TenantsApi for TenantRestService {
    async fn get_list(
        &self,
        input: &GetTenantsInput,
    ) -> Result<PagedResult<TenantDto>, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[TENANTS]), Some(input))
            .await
    }

    async fn get(&self, id: &str) -> Result<TenantDto, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[TENANTS, id]), None::<&()>)
            .await
    }

    async fn create(&self, input: &SaasTenantCreateDto) -> Result<TenantDto, TransportError> {
        self.rest.post_json(&self.rest.url(&[TENANTS]), input).await
    }

    async fn update(
        &self,
        id: &str,
        input: &SaasTenantUpdateDto,
    ) -> Result<TenantDto, TransportError> {
        self.rest
            .put_json(&self.rest.url(&[TENANTS, id]), input)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.rest.delete(&self.rest.url(&[TENANTS, id])).await
    }

    async fn get_default_connection_string(&self, id: &str) -> Result<String, TransportError> {
        self.rest
            .get_text(&self.rest.url(&[TENANTS, id, DEFAULT_CONNECTION_STRING]))
            .await
    }

    async fn update_default_connection_string(
        &self,
        id: &str,
        connection_string: &str,
    ) -> Result<(), TransportError> {
        let url = self.rest.url(&[TENANTS, id, DEFAULT_CONNECTION_STRING]);
        self.rest
            .execute(
                RequestDescriptor::put(url).param("defaultConnectionString", connection_string),
            )
            .await
    }

    async fn delete_default_connection_string(&self, id: &str) -> Result<(), TransportError> {
        self.rest
            .delete(&self.rest.url(&[TENANTS, id, DEFAULT_CONNECTION_STRING]))
            .await
    }

    async fn get_edition_lookup(&self) -> Result<Vec<EditionLookupDto>, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[TENANTS, "lookup", EDITIONS]), None::<&()>)
            .await
    }

    async fn set_password(
        &self,
        id: &str,
        input: &SaasTenantSetPasswordDto,
    ) -> Result<(), TransportError> {
        let url = self.rest.url(&[TENANTS, id, "set-password"]);
        self.rest
            .execute(RequestDescriptor::put(url).json(input)?)
            .await
    }
}

/// `EditionsApi` over `{base}/editions`.
#[derive(Debug, Clone)]
pub struct EditionRestService {
    rest: RestClient,
}

impl EditionRestService {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl EditionsApi for EditionRestService {
    async fn get_list(
        &self,
        input: &GetEditionsInput,
    ) -> Result<PagedResult<EditionDto>, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[EDITIONS]), Some(input))
            .await
    }

    async fn get_all(&self) -> Result<Vec<EditionDto>, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[EDITIONS, "all"]), None::<&()>)
            .await
    }

    async fn get(&self, id: &str) -> Result<EditionDto, TransportError> {
        self.rest
            .get_json(&self.rest.url(&[EDITIONS, id]), None::<&()>)
            .await
    }

    async fn create(&self, input: &EditionCreateDto) -> Result<EditionDto, TransportError> {
        self.rest.post_json(&self.rest.url(&[EDITIONS]), input).await
    }

    async fn update(
        &self,
        id: &str,
        input: &EditionUpdateDto,
    ) -> Result<EditionDto, TransportError> {
        self.rest
            .put_json(&self.rest.url(&[EDITIONS, id]), input)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.rest.delete(&self.rest.url(&[EDITIONS, id])).await
    }

    async fn get_usage_statistics(&self) -> Result<EditionUsageStatistics, TransportError> {
        self.rest
            .get_json(
                &self.rest.url(&[EDITIONS, "statistics", "usage-statistic"]),
                None::<&()>,
            )
            .await
    }
}

//! Tenant facade.

use adminkit_dto::PagedResult;
use adminkit_facade::{
    FacadeState, FacadeStore, Operation, OperationResult, RefreshPolicy, Slot, Snapshot,
};
use saas_sdk::{
    EditionLookupDto, GetTenantsInput, SaasTenantCreateDto, SaasTenantSetPasswordDto,
    SaasTenantUpdateDto, TenantDto, TenantsApi,
};
use std::sync::Arc;
use tokio::sync::watch;

const CONNECTION_STRING: Slot = Slot::Side("default-connection-string");

const FETCH_TENANTS: Operation =
    Operation::fetch("fetch_tenants", Slot::Items, "Failed to fetch tenants");
const GET_TENANT: Operation =
    Operation::fetch("get_tenant", Slot::Selected, "Failed to fetch tenant");
const CREATE_TENANT: Operation = Operation::mutation("create_tenant", "Failed to create tenant");
const UPDATE_TENANT: Operation = Operation::mutation("update_tenant", "Failed to update tenant");
const DELETE_TENANT: Operation = Operation::mutation("delete_tenant", "Failed to delete tenant");
const GET_CONNECTION_STRING: Operation = Operation::fetch(
    "get_default_connection_string",
    CONNECTION_STRING,
    "Failed to fetch default connection string",
);
const UPDATE_CONNECTION_STRING: Operation = Operation {
    name: "update_default_connection_string",
    slot: Some(CONNECTION_STRING),
    fallback: "Failed to update default connection string",
};
const DELETE_CONNECTION_STRING: Operation = Operation {
    name: "delete_default_connection_string",
    slot: Some(CONNECTION_STRING),
    fallback: "Failed to delete default connection string",
};
const FETCH_EDITION_LOOKUP: Operation = Operation::fetch(
    "fetch_edition_lookup",
    Slot::Side("edition-lookup"),
    "Failed to fetch editions",
);
const SET_PASSWORD: Operation = Operation::mutation("set_password", "Failed to set password");

/// Side data held next to the tenant page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantSideData {
    /// Last fetched default connection string; `None` until fetched
    pub default_connection_string: Option<String>,
    /// `true` when the tenant has no connection string of its own
    pub use_shared_database: bool,
    pub edition_lookup: Vec<EditionLookupDto>,
}

impl TenantSideData {
    fn set_connection_string(&mut self, value: &str) {
        self.default_connection_string = Some(value.to_owned());
        self.use_shared_database = value.is_empty();
    }
}

pub type TenantsState = FacadeState<TenantDto, TenantSideData>;

/// Paginated tenant view with CRUD and connection-string operations.
///
/// Owned by one consumer when built with [`TenantsFacade::new`]; the
/// [`crate::SaasStateService`] shares one built with
/// [`RefreshPolicy::AfterMutation`].
pub struct TenantsFacade {
    api: Arc<dyn TenantsApi>,
    store: FacadeStore<TenantDto, TenantSideData>,
    policy: RefreshPolicy,
}

impl std::fmt::Debug for TenantsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantsFacade")
            .field("policy", &self.policy)
            .field("state", &self.store.state())
            .finish_non_exhaustive()
    }
}

impl TenantsFacade {
    #[must_use]
    pub fn new(api: Arc<dyn TenantsApi>) -> Self {
        Self::with_policy(api, RefreshPolicy::Manual)
    }

    #[must_use]
    pub fn with_policy(api: Arc<dyn TenantsApi>, policy: RefreshPolicy) -> Self {
        Self {
            api,
            store: FacadeStore::new("tenants"),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> TenantsState {
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

    /// Replace the selected tenant without a request.
    pub fn select(&self, tenant: Option<TenantDto>) {
        self.store.select(tenant);
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Fetch one page; `None` sends an empty query.
    pub async fn fetch_tenants(
        &self,
        query: Option<GetTenantsInput>,
    ) -> OperationResult<PagedResult<TenantDto>> {
        let query = query.unwrap_or_default();
        self.store
            .run(FETCH_TENANTS, self.api.get_list(&query), Snapshot::replace_page)
            .await
    }

    pub async fn get_tenant(&self, id: &str) -> OperationResult<TenantDto> {
        self.store
            .run(GET_TENANT, self.api.get(id), |snapshot, tenant| {
                snapshot.selected = Some(tenant.clone());
            })
            .await
    }

    pub async fn create_tenant(&self, input: &SaasTenantCreateDto) -> OperationResult<TenantDto> {
        let result = self
            .store
            .run(CREATE_TENANT, self.api.create(input), |_, _| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    pub async fn update_tenant(
        &self,
        id: &str,
        input: &SaasTenantUpdateDto,
    ) -> OperationResult<TenantDto> {
        let result = self
            .store
            .run(UPDATE_TENANT, self.api.update(id, input), |_, _| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    pub async fn delete_tenant(&self, id: &str) -> OperationResult<()> {
        let result = self
            .store
            .run(DELETE_TENANT, self.api.delete(id), |_, ()| {})
            .await;
        self.refresh_after(result.is_success()).await;
        result
    }

    /// Fetch the tenant's default connection string into the side data.
    pub async fn get_default_connection_string(&self, id: &str) -> OperationResult<String> {
        self.store
            .run(
                GET_CONNECTION_STRING,
                self.api.get_default_connection_string(id),
                |snapshot, value: &String| snapshot.side.set_connection_string(value),
            )
            .await
    }

    pub async fn update_default_connection_string(
        &self,
        id: &str,
        connection_string: &str,
    ) -> OperationResult<()> {
        self.store
            .run(
                UPDATE_CONNECTION_STRING,
                self.api
                    .update_default_connection_string(id, connection_string),
                |snapshot, ()| snapshot.side.set_connection_string(connection_string),
            )
            .await
    }

    /// Drop the tenant's own connection string, moving it to the shared database.
    pub async fn delete_default_connection_string(&self, id: &str) -> OperationResult<()> {
        self.store
            .run(
                DELETE_CONNECTION_STRING,
                self.api.delete_default_connection_string(id),
                |snapshot, ()| snapshot.side.set_connection_string(""),
            )
            .await
    }

    pub async fn fetch_edition_lookup(&self) -> OperationResult<Vec<EditionLookupDto>> {
        self.store
            .run(
                FETCH_EDITION_LOOKUP,
                self.api.get_edition_lookup(),
                |snapshot, lookup: &Vec<EditionLookupDto>| {
                    snapshot.side.edition_lookup.clone_from(lookup);
                },
            )
            .await
    }

    pub async fn set_password(
        &self,
        id: &str,
        input: &SaasTenantSetPasswordDto,
    ) -> OperationResult<()> {
        self.store
            .run(SET_PASSWORD, self.api.set_password(id, input), |_, ()| {})
            .await
    }

    async fn refresh_after(&self, succeeded: bool) {
        if succeeded && self.policy.refreshes_after_mutation() {
            tracing::debug!(facade = self.store.name(), "refreshing list after mutation");
            let refreshed = self.fetch_tenants(None).await.is_success();
            tracing::debug!(facade = self.store.name(), refreshed, "list refresh finished");
        }
    }
}

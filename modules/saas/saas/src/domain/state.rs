//! Process-scoped saas state.

use adminkit_facade::RefreshPolicy;
use adminkit_http::{RequestExecutor, RestClient};
use saas_sdk::{EditionDto, EditionsApi, TenantDto, TenantsApi};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::SaasConfig;
use crate::domain::editions::EditionsFacade;
use crate::domain::tenants::TenantsFacade;
use crate::infra::{EditionRestService, TenantRestService};

/// Tenant and edition facades shared by every consumer of one session.
///
/// Clones share the same state. Successful creates, updates and deletes
/// re-fetch the affected list with the default query, so readers see the
/// change on their next read or through [`TenantsFacade::subscribe`].
#[derive(Debug, Clone)]
pub struct SaasStateService {
    tenants: Arc<TenantsFacade>,
    editions: Arc<EditionsFacade>,
}

impl SaasStateService {
    #[must_use]
    pub fn new(tenants: Arc<dyn TenantsApi>, editions: Arc<dyn EditionsApi>) -> Self {
        Self {
            tenants: Arc::new(TenantsFacade::with_policy(
                tenants,
                RefreshPolicy::AfterMutation,
            )),
            editions: Arc::new(EditionsFacade::with_policy(
                editions,
                RefreshPolicy::AfterMutation,
            )),
        }
    }

    /// Build the REST services on top of `executor`.
    #[must_use]
    pub fn from_executor(executor: Arc<dyn RequestExecutor>, config: &SaasConfig) -> Self {
        let rest = RestClient::new(executor, config.base_path.clone());
        Self::new(
            Arc::new(TenantRestService::new(rest.clone())),
            Arc::new(EditionRestService::new(rest)),
        )
    }

    #[must_use]
    pub fn tenants(&self) -> &TenantsFacade {
        &self.tenants
    }

    #[must_use]
    pub fn editions(&self) -> &EditionsFacade {
        &self.editions
    }

    #[must_use]
    pub fn get_tenants(&self) -> Vec<TenantDto> {
        self.tenants.state().snapshot.items
    }

    #[must_use]
    pub fn get_tenants_total_count(&self) -> u64 {
        self.tenants.state().snapshot.total_count
    }

    #[must_use]
    pub fn get_editions(&self) -> Vec<EditionDto> {
        self.editions.state().snapshot.items
    }

    #[must_use]
    pub fn get_editions_total_count(&self) -> u64 {
        self.editions.state().snapshot.total_count
    }

    #[must_use]
    pub fn get_usage_statistics(&self) -> BTreeMap<String, i64> {
        self.editions.state().snapshot.side.usage_statistics
    }

    /// Clear both facades. Values already handed out are not affected.
    pub fn reset(&self) {
        self.tenants.reset();
        self.editions.reset();
    }
}

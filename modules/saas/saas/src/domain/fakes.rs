//! In-memory backends for facade tests.

use adminkit_dto::PagedResult;
use adminkit_http::{StatusCode, TransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use saas_sdk::{
    EditionCreateDto, EditionDto, EditionLookupDto, EditionUpdateDto, EditionUsageStatistics,
    EditionsApi, GetEditionsInput, GetTenantsInput, SaasTenantCreateDto, SaasTenantSetPasswordDto,
    SaasTenantUpdateDto, TenantDto, TenantsApi,
};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

/// Failure queued for the next call, or a gate the next list call waits on.
#[derive(Default)]
pub struct Script {
    failures: Mutex<VecDeque<TransportError>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl Script {
    pub fn fail_next(&self, error: TransportError) {
        self.failures.lock().push_back(error);
    }

    /// Hold the next list call until the returned notify fires.
    pub fn hold_next_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    fn take_failure(&self) -> Result<(), TransportError> {
        match self.failures.lock().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

fn not_found(what: &str) -> TransportError {
    TransportError::status(StatusCode::NOT_FOUND, format!("{what} not found"))
}

fn page<T: Clone>(items: &[T]) -> PagedResult<T> {
    PagedResult::new(items.to_vec(), items.len() as u64)
}

pub fn edition(id: &str, name: &str) -> EditionDto {
    EditionDto {
        id: id.to_owned(),
        display_name: name.to_owned(),
        plan_id: None,
        plan_name: None,
        tenant_count: None,
        concurrency_stamp: Some(format!("{id}-v1")),
    }
}

pub fn tenant(id: &str, name: &str) -> TenantDto {
    TenantDto {
        id: id.to_owned(),
        name: name.to_owned(),
        edition_id: None,
        edition_name: None,
        edition_end_date_utc: None,
        activation_state: saas_sdk::ActivationState::Active,
        activation_end_date: None,
        concurrency_stamp: Some(format!("{id}-v1")),
    }
}

#[derive(Default)]
pub struct FakeEditions {
    pub editions: Mutex<Vec<EditionDto>>,
    pub list_queries: Mutex<Vec<GetEditionsInput>>,
    pub usage: Mutex<BTreeMap<String, i64>>,
    pub script: Script,
}

impl FakeEditions {
    pub fn with(editions: Vec<EditionDto>) -> Arc<Self> {
        let fake = Self::default();
        *fake.editions.lock() = editions;
        Arc::new(fake)
    }

    pub fn list_calls(&self) -> usize {
        self.list_queries.lock().len()
    }
}

#[async_trait]
impl EditionsApi for FakeEditions {
    async fn get_list(
        &self,
        input: &GetEditionsInput,
    ) -> Result<PagedResult<EditionDto>, TransportError> {
        self.list_queries.lock().push(input.clone());
        self.script.pass_gate().await;
        self.script.take_failure()?;
        let editions = self.editions.lock().clone();
        let matching: Vec<EditionDto> = editions
            .into_iter()
            .filter(|e| {
                input
                    .filter
                    .as_deref()
                    .is_none_or(|f| e.display_name.to_lowercase().contains(&f.to_lowercase()))
            })
            .collect();
        Ok(page(&matching))
    }

    async fn get_all(&self) -> Result<Vec<EditionDto>, TransportError> {
        self.script.take_failure()?;
        Ok(self.editions.lock().clone())
    }

    async fn get(&self, id: &str) -> Result<EditionDto, TransportError> {
        self.script.take_failure()?;
        self.editions
            .lock()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found("Edition"))
    }

    async fn create(&self, input: &EditionCreateDto) -> Result<EditionDto, TransportError> {
        self.script.take_failure()?;
        let mut editions = self.editions.lock();
        let created = edition(&format!("ed-{}", editions.len() + 1), &input.display_name);
        editions.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &str,
        input: &EditionUpdateDto,
    ) -> Result<EditionDto, TransportError> {
        self.script.take_failure()?;
        let mut editions = self.editions.lock();
        let existing = editions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("Edition"))?;
        if existing.concurrency_stamp.as_deref() != Some(input.concurrency_stamp.as_str()) {
            return Err(TransportError::status(
                StatusCode::CONFLICT,
                "The data you have submitted has already changed by another user",
            ));
        }
        existing.display_name.clone_from(&input.display_name);
        existing.concurrency_stamp = Some(format!("{id}-v2"));
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.script.take_failure()?;
        let mut editions = self.editions.lock();
        let before = editions.len();
        editions.retain(|e| e.id != id);
        if editions.len() == before {
            return Err(not_found("Edition"));
        }
        Ok(())
    }

    async fn get_usage_statistics(&self) -> Result<EditionUsageStatistics, TransportError> {
        self.script.take_failure()?;
        Ok(EditionUsageStatistics {
            data: self.usage.lock().clone(),
        })
    }
}

#[derive(Default)]
pub struct FakeTenants {
    pub tenants: Mutex<Vec<TenantDto>>,
    pub list_queries: Mutex<Vec<GetTenantsInput>>,
    pub connection_strings: Mutex<BTreeMap<String, String>>,
    pub passwords: Mutex<Vec<(String, SaasTenantSetPasswordDto)>>,
    pub script: Script,
}

impl FakeTenants {
    pub fn with(tenants: Vec<TenantDto>) -> Arc<Self> {
        let fake = Self::default();
        *fake.tenants.lock() = tenants;
        Arc::new(fake)
    }

    pub fn list_calls(&self) -> usize {
        self.list_queries.lock().len()
    }

    fn ensure_exists(&self, id: &str) -> Result<(), TransportError> {
        if self.tenants.lock().iter().any(|t| t.id == id) {
            Ok(())
        } else {
            Err(not_found("Tenant"))
        }
    }
}

#[async_trait]
impl TenantsApi for FakeTenants {
    async fn get_list(
        &self,
        input: &GetTenantsInput,
    ) -> Result<PagedResult<TenantDto>, TransportError> {
        self.list_queries.lock().push(input.clone());
        self.script.pass_gate().await;
        self.script.take_failure()?;
        Ok(page(&self.tenants.lock()))
    }

    async fn get(&self, id: &str) -> Result<TenantDto, TransportError> {
        self.script.take_failure()?;
        self.tenants
            .lock()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found("Tenant"))
    }

    async fn create(&self, input: &SaasTenantCreateDto) -> Result<TenantDto, TransportError> {
        self.script.take_failure()?;
        let mut tenants = self.tenants.lock();
        let created = tenant(&format!("t{}", tenants.len() + 1), &input.name);
        tenants.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &str,
        input: &SaasTenantUpdateDto,
    ) -> Result<TenantDto, TransportError> {
        self.script.take_failure()?;
        let mut tenants = self.tenants.lock();
        let existing = tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("Tenant"))?;
        existing.name.clone_from(&input.name);
        existing.edition_id.clone_from(&input.edition_id);
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.script.take_failure()?;
        self.ensure_exists(id)?;
        self.tenants.lock().retain(|t| t.id != id);
        Ok(())
    }

    async fn get_default_connection_string(&self, id: &str) -> Result<String, TransportError> {
        self.script.take_failure()?;
        self.ensure_exists(id)?;
        Ok(self
            .connection_strings
            .lock()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_default_connection_string(
        &self,
        id: &str,
        connection_string: &str,
    ) -> Result<(), TransportError> {
        self.script.take_failure()?;
        self.ensure_exists(id)?;
        self.connection_strings
            .lock()
            .insert(id.to_owned(), connection_string.to_owned());
        Ok(())
    }

    async fn delete_default_connection_string(&self, id: &str) -> Result<(), TransportError> {
        self.script.take_failure()?;
        self.ensure_exists(id)?;
        self.connection_strings.lock().remove(id);
        Ok(())
    }

    async fn get_edition_lookup(&self) -> Result<Vec<EditionLookupDto>, TransportError> {
        self.script.take_failure()?;
        Ok(vec![EditionLookupDto {
            id: "ed-1".to_owned(),
            display_name: "Pro".to_owned(),
        }])
    }

    async fn set_password(
        &self,
        id: &str,
        input: &SaasTenantSetPasswordDto,
    ) -> Result<(), TransportError> {
        self.script.take_failure()?;
        self.ensure_exists(id)?;
        self.passwords.lock().push((id.to_owned(), input.clone()));
        Ok(())
    }
}
